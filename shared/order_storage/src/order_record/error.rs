//! Error types for order table storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

/// Result type alias for order table operations
pub type OrderStorageResult<T> = Result<T, OrderStorageError>;

/// Storage error types for order table operations
#[derive(Debug, Error)]
pub enum OrderStorageError {
    /// Failed to put the order into `DynamoDB`
    #[error("Failed to put order into DynamoDB: {0:?}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),
}
