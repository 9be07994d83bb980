//! Error type shared by the order function handlers

use order_storage::invoice::{BillingPeriodError, InvoiceStorageError};
use order_storage::order_record::OrderStorageError;
use thiserror::Error;

/// Result type for handler cores
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Why a handler invocation failed
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event does not carry a well-formed order
    #[error("Invalid order event: {0}")]
    InvalidOrder(#[from] serde_json::Error),

    /// The order date cannot be mapped to a billing period
    #[error(transparent)]
    InvalidOrderDate(#[from] BillingPeriodError),

    /// A required query string parameter is absent or empty
    #[error("Missing query string parameter: {0}")]
    MissingParameter(&'static str),

    /// The order table rejected or failed the write
    #[error(transparent)]
    OrderStorage(#[from] OrderStorageError),

    /// The invoice bucket rejected or failed the operation
    #[error(transparent)]
    InvoiceStorage(#[from] InvoiceStorageError),
}

impl HandlerError {
    /// Whether the failure is caused by the caller's input rather than a backend
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrder(_) | Self::InvalidOrderDate(_) | Self::MissingParameter(_)
        )
    }

    /// Logs the failure once, at a level matching its cause
    pub fn log(&self, operation: &str) {
        if self.is_client_error() {
            tracing::warn!(operation, error = %self, "Rejected invalid input");
        } else {
            tracing::error!(operation, error = %self, "Backend operation failed");
        }
    }
}
