//! Video delivery for inline menu presses
//!
//! A callback press sends the chosen video card by file_id with an HTML
//! caption. Whatever happens to the send, the inline menu is offered again
//! so the visitor can keep browsing.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, ParseMode};

use super::menus::build_video_menu_keyboard;
use crate::catalog::{ResponseCatalog, VideoEntry};
use crate::telegram::Bot;

/// Shown when the callback payload has no entry in the catalog.
pub(super) const VIDEO_UNAVAILABLE: &str = "⚠️ Это видео временно недоступно.";

/// Shown when Telegram rejects the sendVideo call (dead file_id, network).
pub(super) const VIDEO_SEND_FAILED: &str = "⚠️ Не удалось загрузить видео. Пожалуйста, попробуйте позже.";

/// Prompt re-sent with the inline menu after every callback.
pub(super) const NEXT_VIDEO_PROMPT: &str = "Выберите следующее видео:";

/// Builds the HTML caption for a video card.
///
/// Title, description and specs are trusted catalog content and go in
/// unescaped, so responses.json may use its own HTML markup.
pub(super) fn build_video_caption(video: &VideoEntry) -> String {
    format!(
        "<b>{}</b>\n\n{}\n\n<i>Характеристики:</i>\n{}",
        video.title, video.description, video.specs
    )
}

/// Handles a press on the inline video menu.
///
/// Answers the callback first so the button stops spinning, then sends the
/// chosen video or an apology, and always re-offers the menu afterwards.
pub async fn handle_video_callback(
    bot: Bot,
    q: CallbackQuery,
    catalog: Arc<ResponseCatalog>,
) -> ResponseResult<()> {
    let callback_id = q.id.clone();
    let _ = bot.answer_callback_query(callback_id.clone()).await;

    let Some(chat_id) = q.message.as_ref().map(|m| m.chat().id) else {
        log::warn!("Callback query {} has no originating message, nowhere to reply", callback_id);
        return Ok(());
    };

    match q.data.as_deref() {
        Some(data) => match catalog.video(data) {
            Some(video) => {
                let send_result = bot
                    .send_video(chat_id, InputFile::file_id(FileId(video.file_id.clone())))
                    .caption(build_video_caption(video))
                    .parse_mode(ParseMode::Html)
                    .await;

                if let Err(e) = send_result {
                    log::error!("Failed to send video {:?} to chat {}: {}", data, chat_id, e);
                    let _ = bot.send_message(chat_id, VIDEO_SEND_FAILED).await;
                }
            }
            None => {
                log::error!("Video {:?} is not in the catalog", data);
                let _ = bot.send_message(chat_id, VIDEO_UNAVAILABLE).await;
            }
        },
        None => {
            log::warn!("Callback query {} from chat {} carries no data", callback_id, chat_id);
        }
    }

    bot.send_message(chat_id, NEXT_VIDEO_PROMPT)
        .reply_markup(build_video_menu_keyboard(&catalog))
        .await?;

    Ok(())
}
