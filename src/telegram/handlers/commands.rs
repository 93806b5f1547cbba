//! Command endpoints. /start is the only command the bot carries.

use teloxide::types::Message;

use super::menus::send_main_menu;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::Bot;

/// /start greets the chat with the main menu.
pub async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    send_main_menu(bot, msg.chat.id, &deps.catalog).await?;
    Ok(())
}
