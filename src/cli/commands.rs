use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::client::PortalClient;
use crate::models::{CaseStatus, OrderKind, SearchCriteria, ThemeMode};
use crate::state::{ScreenState, SearchScreen, SubmitDecision};
use crate::store::{FavoritesSet, FileStore, RecentsList, load_theme_mode, save_theme_mode};
use crate::utils::portal_base_url;

use super::render;

#[derive(Parser)]
#[command(name = "court-case-explorer")]
#[command(about = "Search High Court case records, orders and hearing history")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the case types accepted by filing-number search
    CaseTypes,

    /// Search by filing number
    Filing {
        /// Case type code (see `case-types`)
        #[arg(long)]
        case_type: String,
        /// Filing number
        #[arg(long)]
        number: String,
        /// Filing year (four digits)
        #[arg(long)]
        year: String,
        /// Show every hearing and order instead of the first five
        #[arg(long)]
        all: bool,
    },

    /// Search pending or disposed cases by advocate name
    Advocate {
        /// Advocate name as registered with the court
        #[arg(long)]
        name: String,
        /// Registration year (four digits)
        #[arg(long)]
        year: String,
        /// Pending or disposed cases
        #[arg(long, value_parser = parse_status, default_value = "pending")]
        status: CaseStatus,
    },

    /// Search pending or disposed cases by party name
    Party {
        /// Petitioner or respondent name
        #[arg(long)]
        name: String,
        /// Registration year (four digits)
        #[arg(long)]
        year: String,
        /// Pending or disposed cases
        #[arg(long, value_parser = parse_status, default_value = "pending")]
        status: CaseStatus,
    },

    /// Look up full case details by CNR number
    Details {
        /// 16-character CNR number
        cino: String,
        /// Show every hearing and order instead of the first five
        #[arg(long)]
        all: bool,
    },

    /// Download a court order as a PDF file
    OrderPdf {
        /// CNR number of the case
        #[arg(long)]
        cino: String,
        /// Order number within the case
        #[arg(long)]
        order_no: String,
        /// Interim or final order
        #[arg(long, value_parser = parse_order_kind, default_value = "interim")]
        kind: OrderKind,
        /// Output path for the PDF
        #[arg(long)]
        out: PathBuf,
    },

    /// Manage favorited services
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Show recently used services, newest first
    Recents,

    /// Show or set the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorited services
    List,
    /// Toggle a service in or out of favorites
    Toggle {
        /// Service name, e.g. "Case Number"
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the current theme mode
    Get,
    /// Set the theme mode (light, dark or system)
    Set {
        #[arg(value_parser = parse_theme_mode)]
        mode: ThemeMode,
    },
}

fn parse_status(raw: &str) -> Result<CaseStatus, String> {
    match raw.to_ascii_lowercase().as_str() {
        "pending" | "p" => Ok(CaseStatus::Pending),
        "disposed" | "d" => Ok(CaseStatus::Disposed),
        other => Err(format!("'{other}' is not a case status (use 'pending' or 'disposed')")),
    }
}

fn parse_order_kind(raw: &str) -> Result<OrderKind, String> {
    match raw.to_ascii_lowercase().as_str() {
        "interim" => Ok(OrderKind::Interim),
        "final" => Ok(OrderKind::Final),
        other => Err(format!("'{other}' is not an order kind (use 'interim' or 'final')")),
    }
}

fn parse_theme_mode(raw: &str) -> Result<ThemeMode, String> {
    match raw.to_ascii_lowercase().as_str() {
        "light" | "dark" | "system" => Ok(ThemeMode::from_str_lossy(raw)),
        other => Err(format!("'{other}' is not a theme mode (use 'light', 'dark' or 'system')")),
    }
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::CaseTypes => case_types().await,
        Commands::Filing { case_type, number, year, all } => {
            let criteria = SearchCriteria::Filing {
                case_type,
                filing_no: number,
                filing_year: year,
            };
            search(criteria, "Filing Number", all).await
        }
        Commands::Advocate { name, year, status } => {
            let criteria =
                SearchCriteria::Advocate { advocate_name: name, reg_year: year, status };
            search(criteria, "Advocate Name", false).await
        }
        Commands::Party { name, year, status } => {
            let criteria = SearchCriteria::Party { party_name: name, reg_year: year, status };
            search(criteria, "Party Name", false).await
        }
        Commands::Details { cino, all } => {
            search(SearchCriteria::Cnr { cino }, "Case Number", all).await
        }
        Commands::OrderPdf { cino, order_no, kind, out } => {
            order_pdf(&cino, &order_no, kind, &out).await
        }
        Commands::Favorites { action } => favorites(action),
        Commands::Recents => recents(),
        Commands::Theme { action } => theme(action),
    }
}

async fn case_types() -> Result<()> {
    let client = PortalClient::new(portal_base_url())?;
    let options = client.fetch_case_types().await.context("Failed to fetch case types")?;
    render::print_case_types(&options);
    Ok(())
}

/// Drive one search through the screen state machine to a terminal state.
async fn search(criteria: SearchCriteria, service_name: &str, expand_all: bool) -> Result<()> {
    let mut screen = SearchScreen::new();
    let token = match screen.submit(criteria.clone())? {
        SubmitDecision::Dispatch(token) => token,
        SubmitDecision::InFlight => return Ok(()),
    };

    record_recent(service_name);

    let client = PortalClient::new(portal_base_url())?;
    debug!(base_url = client.base_url(), "dispatching search");
    let outcome = client.search(&criteria).await;
    screen.resolve(token, outcome);

    render::print_screen(screen.state(), expand_all);
    if let ScreenState::Failed(err) = screen.state() {
        bail!("search failed: {err}");
    }
    Ok(())
}

async fn order_pdf(cino: &str, order_no: &str, kind: OrderKind, out: &Path) -> Result<()> {
    let client = PortalClient::new(portal_base_url())?;
    let bytes = client
        .fetch_order_pdf(cino, order_no, kind)
        .await
        .context("Failed to fetch order PDF")?;
    fs::write(out, &bytes).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Saved {} bytes to {}", bytes.len(), out.display());
    Ok(())
}

fn favorites(action: FavoritesAction) -> Result<()> {
    let store = FileStore::open_default()?;
    match action {
        FavoritesAction::List => {
            let favorites = FavoritesSet::load(&store);
            if favorites.names().is_empty() {
                println!("No favorites yet.");
            } else {
                for name in favorites.names() {
                    println!("{name}");
                }
            }
        }
        FavoritesAction::Toggle { name } => {
            let mut favorites = FavoritesSet::load(&store);
            if favorites.toggle(&store, &name) {
                println!("Added '{name}' to favorites.");
            } else {
                println!("Removed '{name}' from favorites.");
            }
        }
    }
    Ok(())
}

fn recents() -> Result<()> {
    let store = FileStore::open_default()?;
    let recents = RecentsList::load(&store);
    if recents.names().is_empty() {
        println!("No recent services.");
    } else {
        for name in recents.names() {
            println!("{name}");
        }
    }
    Ok(())
}

fn theme(action: ThemeAction) -> Result<()> {
    let store = FileStore::open_default()?;
    match action {
        ThemeAction::Get => println!("{}", load_theme_mode(&store).as_str()),
        ThemeAction::Set { mode } => {
            save_theme_mode(&store, mode);
            println!("Theme set to {}.", mode.as_str());
        }
    }
    Ok(())
}

/// Storage failures must not block a search.
fn record_recent(service_name: &str) {
    let Ok(store) = FileStore::open_default() else {
        return;
    };
    RecentsList::load(&store).record(&store, service_name);
}
