//! Error types for invoice bucket operations

use aws_sdk_s3::{error::SdkError, operation::put_object::PutObjectError};
use thiserror::Error;

/// Result type for invoice bucket operations
pub type InvoiceStorageResult<T> = Result<T, InvoiceStorageError>;

/// Errors that can occur during invoice bucket operations
#[derive(Error, Debug)]
pub enum InvoiceStorageError {
    /// S3 service error
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<SdkError<PutObjectError>> for InvoiceStorageError {
    fn from(error: SdkError<PutObjectError>) -> Self {
        match error {
            SdkError::ServiceError(err) => Self::S3Error(format!("{:?}", err.err())),
            _ => Self::S3Error(error.to_string()),
        }
    }
}

/// Error raised when a billing period cannot be derived from an order date
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognised order date: {0:?}")]
pub struct BillingPeriodError(pub String);
