pub mod config;
pub mod error;
pub mod logging;

pub mod convert;
pub mod fetch;
pub mod naming;
pub mod server;
