use once_cell::sync::Lazy;
use std::env;

/// Path to the response catalog (menus, curator text, video cards)
/// Read from RESPONSES_PATH environment variable
/// Default: responses.json
pub static RESPONSES_PATH: Lazy<String> =
    Lazy::new(|| env::var("RESPONSES_PATH").unwrap_or_else(|_| "responses.json".to_string()));

/// Path to the file_id capture log appended on every admin video upload
/// Read from UPLOAD_LOG_PATH environment variable
/// Default: video_ids.txt
pub static UPLOAD_LOG_PATH: Lazy<String> =
    Lazy::new(|| env::var("UPLOAD_LOG_PATH").unwrap_or_else(|_| "video_ids.txt".to_string()));

/// Path of the combined terminal/file log
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> = Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Telegram bot token, from BOT_TOKEN with TELOXIDE_TOKEN as a fallback
/// Empty when neither variable is set; bot construction rejects that
pub static BOT_TOKEN: Lazy<String> =
    Lazy::new(|| env::var("BOT_TOKEN").or_else(|_| env::var("TELOXIDE_TOKEN")).unwrap_or_default());

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    /// The one account allowed to register new video file_ids, and the
    /// recipient of forwarded upload copies
    /// Read from ADMIN_USER_ID environment variable
    /// Defaults to 0, which rejects uploads from everyone
    pub static ADMIN_USER_ID: Lazy<i64> =
        Lazy::new(|| env::var("ADMIN_USER_ID").ok().and_then(|raw| raw.parse().ok()).unwrap_or_default());
}

/// Network configuration
pub mod network {
    use std::time::Duration;

    /// Timeout applied to every Telegram API request. Generous because
    /// sendVideo of a large catalog entry can take a while even by file_id.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
}
