//! Command line front end for the `human-duration` binary.
//!
//! Arguments are parsed by hand; flags override values loaded from the
//! environment by [`Config::from_env`](crate::config::Config::from_env).

mod commands;
mod errors;
mod help;


pub use commands::{Command, FormatRequest};
pub use errors::CommandParseError;
pub use help::help_text;
