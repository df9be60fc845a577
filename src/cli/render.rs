//! Terminal rendering of search outcomes.
//!
//! This is the rendering boundary: the `"N/A"` sentinel for missing data is
//! substituted here and nowhere else, and the 5-entry collection cap is
//! applied here via [`CappedList`].

use chrono::NaiveDate;

use crate::models::{CaseListing, CaseRecord, CaseTypeOption, FoundCases};
use crate::normalizer::format_display_date;
use crate::state::{CappedList, ScreenState};

/// Sentinel shown for absent values.
const NA: &str = "N/A";

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NA)
}

fn date_or_na(date: Option<&NaiveDate>) -> String {
    date.map(format_display_date).unwrap_or_else(|| NA.to_string())
}

/// Render a terminal screen state.
pub fn print_screen(state: &ScreenState, expand_all: bool) {
    match state {
        ScreenState::Idle => println!("Ready for a new search."),
        ScreenState::Submitting => println!("Searching..."),
        ScreenState::Results(FoundCases::Details(record)) => print_case_record(record, expand_all),
        ScreenState::Results(FoundCases::Listing(listing)) => print_listing(listing),
        ScreenState::NotFound => print_not_found(),
        ScreenState::Failed(err) => {
            println!("Something went wrong: {err}");
            println!("You can retry the same search or start a new one.");
        }
    }
}

pub fn print_not_found() {
    println!("No matching case records were found.");
    println!();
    println!("Tips to refine your search:");
    println!("  - Double-check the case/filing number and year");
    println!("  - Try the other case status (pending vs disposed)");
    println!("  - Spell names exactly as they appear in court records");
}

pub fn print_case_record(record: &CaseRecord, expand_all: bool) {
    println!("Case Details Found");
    println!("==================");
    println!();
    println!("Basic Case Information");
    println!("  CINO:             {}", or_na(record.cino.as_deref()));
    println!("  Case Type:        {}", or_na(record.type_name.as_deref()));
    println!(
        "  Registration No:  {}/{}",
        or_na(record.registration_no.as_deref()),
        or_na(record.registration_year.as_deref())
    );
    println!(
        "  Filing No:        {}/{}",
        or_na(record.filing_no.as_deref()),
        or_na(record.filing_year.as_deref())
    );
    println!("  Filing Date:      {}", date_or_na(record.filing_date.as_ref()));
    println!("  Registration Date:{}", date_or_na(record.registration_date.as_ref()));
    println!("  Status:           {}", record.status.map(|s| s.label()).unwrap_or(NA));
    if let Some(date) = &record.decision_date {
        println!("  Disposal Date:    {}", format_display_date(date));
    }
    if let Some(disposal) = &record.disposal_type {
        println!("  Disposal Type:    {disposal}");
    }

    println!();
    println!("Parties");
    println!("  Petitioner:       {}", or_na(record.petitioner.as_deref()));
    println!("    Advocate:       {}", or_na(record.petitioner_advocate.as_deref()));
    println!("  Respondent:       {}", or_na(record.respondent.as_deref()));
    println!("    Advocate:       {}", or_na(record.respondent_advocate.as_deref()));
    for extra in &record.extra_respondents {
        println!("  Also Respondent:  {extra}");
    }

    println!();
    println!("Court Information");
    println!("  Establishment:    {}", or_na(record.establishment.as_deref()));
    println!("  Bench:            {}", or_na(record.bench.as_deref()));
    println!("  Judge:            {}", or_na(record.coram.as_deref()));
    println!("  Section:          {}", or_na(record.judicial_branch.as_deref()));
    if let Some(short_order) = &record.short_order {
        println!("  Short Order:      {short_order}");
    }

    if let Some(lower) = &record.lower_court {
        println!();
        println!("Subordinate Court Information");
        println!("  Court:            {}", or_na(lower.court_name.as_deref()));
        println!("  Case No/Year:     {}", or_na(lower.case_no.as_deref()));
        println!("  Decision Date:    {}", or_na(lower.decision_date.as_deref()));
    }

    if !record.hearings.is_empty() {
        println!();
        println!("Recent Hearings");
        let mut hearings = CappedList::new(record.hearings.clone());
        if expand_all && hearings.has_toggle() {
            hearings.toggle();
        }
        for hearing in hearings.visible() {
            println!(
                "  {}  {}",
                date_or_na(hearing.business_date.as_ref()),
                or_na(hearing.purpose.as_deref())
            );
            println!("    Judge: {}", or_na(hearing.judge.as_deref()));
            if let Some(next) = &hearing.next_hearing_date {
                println!("    Next:  {}", format_display_date(next));
            }
        }
        if hearings.hidden_count() > 0 {
            println!("  (+{} more, pass --all to view all)", hearings.hidden_count());
        }
    }

    print_orders("Orders Details", &record.interim_orders, expand_all);
    print_orders("Final Orders", &record.final_orders, expand_all);

    if let Some(category) = &record.category {
        println!();
        println!("Category Details");
        println!("  Category:         {}", or_na(category.category.as_deref()));
        println!("  Sub Category:     {}", or_na(category.sub_category.as_deref()));
    }
}

fn print_orders(title: &str, orders: &[crate::models::OrderEntry], expand_all: bool) {
    if orders.is_empty() {
        return;
    }
    println!();
    println!("{title}");
    let mut capped = CappedList::new(orders.to_vec());
    if expand_all && capped.has_toggle() {
        capped.toggle();
    }
    for order in capped.visible() {
        println!(
            "  Order #{}  {}",
            or_na(order.order_no.as_deref()),
            date_or_na(order.order_date.as_ref())
        );
        println!("    {}", or_na(order.details.as_deref()));
    }
    if capped.hidden_count() > 0 {
        println!("  (+{} more, pass --all to view all)", capped.hidden_count());
    }
}

pub fn print_listing(listing: &CaseListing) {
    println!("Cases Details Found");
    println!("===================");
    println!();
    println!("Court:       {}", or_na(listing.establishment.as_deref()));
    println!("Total Cases: {}", listing.cases.len());
    println!();
    for (index, case) in listing.cases.iter().enumerate() {
        println!(
            "(#{}) {}/{}/{}",
            index + 1,
            or_na(case.type_name.as_deref()),
            or_na(case.registration_no.as_deref()),
            or_na(case.registration_year.as_deref())
        );
        println!("  CINO:       {}", or_na(case.cino.as_deref()));
        println!("  Petitioner: {}", or_na(case.petitioner.as_deref()));
        println!("  Respondent: {}", or_na(case.respondent.as_deref()));
    }
}

pub fn print_case_types(options: &[CaseTypeOption]) {
    if options.is_empty() {
        println!("No case types available; retry when the portal is reachable.");
        return;
    }
    println!("Case Types ({})", options.len());
    for option in options {
        println!("  {:>6}  {}", option.value, option.label);
    }
}
