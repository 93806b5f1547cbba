//! Bot construction and command registration.
//!
//! The bot talks to api.telegram.org unless BOT_API_URL points it at a
//! local Bot API server.

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Я умею:")]
pub enum Command {
    #[command(description = "показывает главное меню выставки")]
    Start,
}

/// Creates a Bot instance from the configured token.
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Missing token, invalid BOT_API_URL, or client build failure
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        anyhow::bail!("BOT_TOKEN / TELOXIDE_TOKEN is not set");
    }

    let client = ClientBuilder::new().timeout(config::network::REQUEST_TIMEOUT).build()?;
    let mut bot = Bot::with_client(token, client);

    if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Routing Bot API calls to {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot = bot.set_api_url(url);
    }

    Ok(bot)
}

/// Registers the command list in the Telegram UI.
///
/// The list comes from the [`Command`] derive, so the /-menu stays in
/// sync with what the dispatcher actually routes.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}
