//! Gate Core
//!
//! This crate provides the shared functionality for the guardgate workspace,
//! including error handling, configuration, and logging setup.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, GateConfig};
pub use error::{CoreError, Result};
pub use logging::init_logging;
