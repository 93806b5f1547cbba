//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Combined terminal and file logger setup
//! - Startup configuration logging

use anyhow::{Context, Result};
use simplelog::*;
use std::fs::OpenOptions;
use std::path::Path;

use crate::core::config;

/// Initializes logging to the terminal and to a log file.
///
/// The file is opened in append mode so restarts keep earlier history.
///
/// # Errors
/// Fails if the log file cannot be opened or a global logger is already
/// installed.
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("Failed to open log file {}", log_file_path))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .context("Failed to initialize logger")?;

    Ok(())
}

/// Logs the effective configuration at application startup
///
/// Reports:
/// - Response catalog path and whether the file exists
/// - Upload log path
/// - Whether a bot token and admin user ID are configured
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  Startup Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let responses_path = config::RESPONSES_PATH.as_str();
    if Path::new(responses_path).exists() {
        log::info!("✅ RESPONSES_PATH: {}", responses_path);
    } else {
        log::error!("❌ RESPONSES_PATH: {} (FILE NOT FOUND!)", responses_path);
        log::error!("   Working directory: {:?}", std::env::current_dir());
    }

    log::info!("📝 UPLOAD_LOG_PATH: {}", config::UPLOAD_LOG_PATH.as_str());

    if config::BOT_TOKEN.is_empty() {
        log::error!("❌ BOT_TOKEN / TELOXIDE_TOKEN: not set");
    } else {
        log::info!("✅ Bot token configured");
    }

    let admin_user_id = *config::admin::ADMIN_USER_ID;
    if admin_user_id == 0 {
        log::warn!("⚠️  ADMIN_USER_ID: not set - video uploads will be rejected for everyone");
    } else {
        log::info!("✅ ADMIN_USER_ID: {}", admin_user_id);
    }

    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
