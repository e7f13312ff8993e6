use thiserror::Error;

/// Failure of a read against the management endpoint.
///
/// Every variant is fatal for a scan. Topology the traversal does not
/// understand and VMs without snapshot data are not errors; they are
/// handled where they are found.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Endpoint unreachable.
    #[error("connection failed: {0}")]
    Connection(String),
    /// Credentials rejected, or the session expired (401).
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// 403.
    #[error("access denied: {0}")]
    AccessDenied(String),
    /// 404.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    /// Any other non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("HTTP error: {0}")]
    Http(String),
}

impl InventoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type InventoryResult<T> = Result<T, InventoryError>;
