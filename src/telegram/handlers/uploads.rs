//! Video upload capture for the admin
//!
//! Any video sent to the bot is treated as a file_id registration attempt:
//! the admin gets the id appended to the upload log, an HTML confirmation,
//! and a forwarded copy for checking. Everyone else is turned away.

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Message, ParseMode, Video};

use super::types::{HandlerDeps, HandlerError};
use crate::core::error::{AppError, AppResult};
use crate::telegram::Bot;

/// Shown to non-admin users who send a video.
pub(super) const UPLOAD_DENIED: &str = "🚫 Доступ запрещен";

/// Shown when any step of the capture fails after authorization.
pub(super) const UPLOAD_FAILED: &str = "🚨 Произошла ошибка при обработке видео";

/// Handler for video uploads (file_id capture)
pub(super) fn video_upload_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.video().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                handle_video_upload(&bot, &msg, &deps).await;
                Ok(())
            }
        })
}

/// Boundary around [`record_upload`]: maps every failure class to its
/// user-visible reply and log line. Never errors itself, the dispatcher
/// should not retry uploads.
pub async fn handle_video_upload(bot: &Bot, msg: &Message, deps: &HandlerDeps) {
    match record_upload(bot, msg, deps).await {
        Ok(()) => {}
        Err(AppError::Unauthorized(user_id)) => {
            log::warn!("Rejected video upload from non-admin user {}", user_id);
            let _ = bot.send_message(msg.chat.id, UPLOAD_DENIED).await;
        }
        Err(e) => {
            log::error!("Failed to process video upload: {}", e);
            let _ = bot.send_message(msg.chat.id, UPLOAD_FAILED).await;
        }
    }
}

/// Captures one uploaded video: appends `name: file_id` to the upload log,
/// confirms to the admin with the id in copyable form, and forwards the
/// video back for eyeballing.
async fn record_upload(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<()> {
    let user_id = msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok()).unwrap_or(0);
    if deps.admin_user_id == 0 || user_id != deps.admin_user_id {
        return Err(AppError::Unauthorized(user_id));
    }

    let Some(video) = msg.video() else {
        return Ok(());
    };

    deps.upload_log.append(video.file_name.as_deref(), &video.file.id.0)?;

    bot.send_message(msg.chat.id, build_upload_confirmation(video))
        .parse_mode(ParseMode::Html)
        .await?;

    bot.forward_message(ChatId(deps.admin_user_id), msg.chat.id, msg.id).await?;

    log::info!(
        "Captured file_id {} for upload {:?}",
        video.file.id.0,
        video.file_name.as_deref().unwrap_or("no_name")
    );

    Ok(())
}

/// Builds the HTML confirmation for a captured video.
///
/// The filename comes from the uploader and is escaped; the file_id goes
/// into a `<code>` block so it can be tapped and copied.
pub(super) fn build_upload_confirmation(video: &Video) -> String {
    use teloxide::utils::html;

    let name = video.file_name.as_deref().unwrap_or("Без названия");
    format!(
        "✅ Видео получено!\n├ Имя: {}\n├ ID: <code>{}</code>\n└ Размер: {} KB",
        html::escape(name),
        video.file.id.0,
        video.file.size / 1024
    )
}
