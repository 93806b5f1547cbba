use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use vitrina::catalog::ResponseCatalog;
use vitrina::core::{config, init_logger, log_startup_configuration};
use vitrina::storage::UploadLog;
use vitrina::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Entry point: logging and environment first, then the bot itself.
///
/// # Errors
/// Fails when the logger, the catalog, or the bot cannot be brought up.
#[tokio::main]
async fn main() -> Result<()> {
    // Panics inside the dispatcher land in the log, not only on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic origin: {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Logger before .env so early startup problems reach the file too
    init_logger(&config::LOG_FILE_PATH)?;

    // .env is optional, real deployments set the environment directly
    let _ = dotenv();

    run_bot().await
}

/// Brings the catalog, the bot, and the handler tree up, then blocks on
/// the dispatcher until shutdown.
async fn run_bot() -> Result<()> {
    let bot_init_start = std::time::Instant::now();
    log::info!("Starting bot...");

    log_startup_configuration();

    // Load the response catalog; without it there is nothing to serve
    let catalog = ResponseCatalog::load(config::RESPONSES_PATH.as_str())
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", config::RESPONSES_PATH.as_str(), e))?;
    catalog.log_validation_warnings();
    let catalog = Arc::new(catalog);
    log::info!(
        "Catalog loaded: {} video card(s), {} menu button(s)",
        catalog.videos.len(),
        catalog.video_menu_buttons().count()
    );

    let bot = create_bot()?;

    let bot_info = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Bot API: {}", e))?;
    log::info!(
        "Bot online: @{} (id {})",
        bot_info.username.as_deref().unwrap_or("unknown"),
        bot_info.id
    );

    // Register /start in the Telegram UI
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let upload_log = Arc::new(UploadLog::new(config::UPLOAD_LOG_PATH.as_str()));
    let admin_user_id = *config::admin::ADMIN_USER_ID;

    let handler = schema(HandlerDeps::new(Arc::clone(&catalog), upload_log, admin_user_id));

    // Long polling; updates queued while the bot was down are stale menus
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    let init_elapsed = bot_init_start.elapsed();
    log::info!("================================================");
    log::info!("🎬 Vitrina up in {:.2}s, long polling", init_elapsed.as_secs_f64());
    log::info!("================================================");

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        // Unmatched updates are dropped without a reply
        .default_handler(|_| async move {})
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher stopped, bot is shutting down");
    Ok(())
}
