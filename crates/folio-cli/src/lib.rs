//! # folio-cli
//!
//! The `folio` command: renders a project catalogue into the portfolio
//! page's container markup.
//!
//! - [`cli`]: Argument definitions
//! - [`config`]: TOML configuration
//! - [`config_handlers`]: `folio config` subcommands
//! - [`render`]: `folio render`
//! - [`logging`]: Subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod render;

pub use config::FolioConfig;
pub use error::{Error, Result};
