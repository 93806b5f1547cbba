//! Dispatcher handler tree.
//!
//! Routing order matters: commands go first, then the two reply-keyboard
//! labels, then inline callbacks, then video uploads. A message that fits
//! none of the branches is ignored.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::handle_start_command;
use super::menus::{send_curator_text, send_video_menu};
use super::types::{HandlerDeps, HandlerError};
use super::uploads::video_upload_handler;
use super::videos::handle_video_callback;
use crate::catalog::{CURATOR_TEXT_LABEL, VIDEO_MENU_LABEL};
use crate::telegram::bot::Command;
use crate::telegram::Bot;

/// Builds the handler tree the dispatcher runs. Integration tests drive
/// the same tree.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler(deps.clone()))
        .branch(curator_text_handler(deps.clone()))
        .branch(video_menu_handler(deps.clone()))
        .branch(callback_handler(deps.clone()))
        .branch(video_upload_handler(deps))
}

/// Routes /start to the main menu.
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        handle_start_command(&bot, &msg, &deps).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Matches the curator text button by its exact label.
fn curator_text_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text == CURATOR_TEXT_LABEL).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                send_curator_text(&bot, msg.chat.id, &deps.catalog).await?;
                Ok(())
            }
        })
}

/// Matches the video menu button by its exact label.
fn video_menu_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text == VIDEO_MENU_LABEL).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                send_video_menu(&bot, msg.chat.id, &deps.catalog).await?;
                Ok(())
            }
        })
}

/// Routes presses on the inline video menu.
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_video_callback(bot, q, Arc::clone(&deps.catalog)).await?;
            Ok(())
        }
    })
}
