//! Core types shared across the picvault workspace: configuration and the
//! unified error taxonomy.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, LogLevel};
