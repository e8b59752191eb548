//! Error types for observer notification.

use thiserror::Error;

/// Errors an observer may report from [`update`](super::OrderObserver::update).
///
/// The registry isolates these: a failing observer is logged and skipped,
/// never blocking the store or later observers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ObserverError {
    /// The observer declined to process this order.
    #[error("Observer rejected order {0}")]
    Rejected(u64),

    /// The observer's side effect failed.
    #[error("Observer failed: {0}")]
    Failed(String),
}

impl From<String> for ObserverError {
    fn from(msg: String) -> Self {
        ObserverError::Failed(msg)
    }
}
