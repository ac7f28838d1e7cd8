//! CLI command handlers, one per file.

mod fetch;
mod url;

pub use fetch::run_fetch;
pub use url::run_url;
