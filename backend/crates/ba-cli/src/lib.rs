//! ba-cli library
//!
//! Exports the sync endpoint client and the local lifecycle commands for
//! use in tests.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod error;
pub mod lifecycle;
pub mod logger;


pub use client::{CliClientResult, Client, ClientError};
pub use error::{CommandError, Result as CommandResult};
pub use lifecycle::{Lifecycle, OffboardSummary, PasswordSetupSummary, StatusReport};
