use thiserror::Error;

/// Error type shared by the catalog, storage, and handler layers.
///
/// `thiserror` derives the conversions, so fallible call sites stay on
/// plain `?`.
///
/// # Example
///
/// ```no_run
/// use vitrina::core::error::AppError;
///
/// fn report(err: &AppError) {
///     log::error!("{}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API call failed
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Reading the catalog file or appending to the upload log failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// responses.json did not parse into the expected shape
    #[error("Response catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Video upload from an account other than the admin
    #[error("Unauthorized upload from user {0}")]
    Unauthorized(i64),
}

/// Shorthand for results carrying [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
