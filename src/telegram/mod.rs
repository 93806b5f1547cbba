//! Telegram side of the bot: construction, commands, and the handler tree

pub mod bot;
pub mod handlers;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{
    handle_start_command, handle_video_callback, handle_video_upload, schema, send_curator_text, send_main_menu,
    send_video_menu, HandlerDeps, HandlerError,
};
pub use teloxide::Bot;
