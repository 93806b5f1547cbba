//! Configuration, error types, and logging shared across the crate

pub mod config;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::*;
pub use error::{AppError, AppResult};
pub use logging::{init_logger, log_startup_configuration};
