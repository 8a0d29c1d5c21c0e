//! CLI command handlers, one file per subcommand.

mod convert;
mod fetch;
mod serve;

pub use convert::run_convert;
pub use fetch::{run_fetch, FetchArgs};
pub use serve::run_serve;
