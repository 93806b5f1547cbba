//! Telegram bot handler tree configuration
//!
//! This module provides the main dispatcher schema for the bot. The
//! handlers are organized in a testable way, allowing integration tests to
//! drive the same handler tree as production code.

mod commands;
mod menus;
mod schema;
mod types;
mod uploads;
mod videos;

pub use commands::handle_start_command;
pub use menus::{send_curator_text, send_main_menu, send_video_menu};
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
pub use uploads::handle_video_upload;
pub use videos::handle_video_callback;
