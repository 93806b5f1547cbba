//! Persistence for captured video file_ids

pub mod upload_log;

// Re-exports for convenience
pub use upload_log::UploadLog;
