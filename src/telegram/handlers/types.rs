//! Shared state threaded through the handler tree.

use std::sync::Arc;

use crate::catalog::ResponseCatalog;
use crate::storage::UploadLog;

/// Boxed error the dispatcher expects from endpoints.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything a handler needs beyond the bot itself: the response
/// catalog, the upload log, and the admin account id.
#[derive(Clone)]
pub struct HandlerDeps {
    pub catalog: Arc<ResponseCatalog>,
    pub upload_log: Arc<UploadLog>,
    pub admin_user_id: i64,
}

impl HandlerDeps {
    pub fn new(catalog: Arc<ResponseCatalog>, upload_log: Arc<UploadLog>, admin_user_id: i64) -> Self {
        Self {
            catalog,
            upload_log,
            admin_user_id,
        }
    }
}
