pub mod environment;

pub use environment::{portal_base_url, store_dir};
