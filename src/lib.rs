//! Vitrina - Telegram bot for the «Витрина» exhibition
//!
//! This library provides all the functionality for the exhibition bot:
//! the response catalog, the menu handlers, video delivery by Telegram
//! file_id, and the admin upload flow that captures new file_ids.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, and logging
//! - `catalog`: Response catalog loaded from responses.json
//! - `storage`: Append-only upload log for captured file_ids
//! - `telegram`: Bot integration and the dispatcher schema

pub mod catalog;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use catalog::ResponseCatalog;
pub use core::{config, AppError, AppResult};
pub use storage::UploadLog;
pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
