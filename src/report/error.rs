//! Error types for report generation.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    /// The requested format tag matched no known generator. The caller gets
    /// an explicit failure instead of a silently chosen format.
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}
