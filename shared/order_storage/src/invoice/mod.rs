//! S3-based invoice storage operations
//!
//! Invoices are the raw JSON of an order event, stored once per account and
//! billing period under `<year>/<month>/<accountid>.json`. A second write in
//! the same period replaces the first.

mod billing_period;
mod error;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, primitives::ByteStream, Client as S3Client};
use strum::Display;
use tracing::debug;

pub use billing_period::BillingPeriod;
pub use error::{BillingPeriodError, InvoiceStorageError, InvoiceStorageResult};

const JSON_SUFFIX: &str = ".json";
const JSON_CONTENT_TYPE: &str = "application/json";

/// User metadata keys attached to invoice objects
#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InvoiceMetadataKey {
    /// Account the invoice belongs to
    AccountId,
    /// Billing period in `<year>/<month>` form
    BillingPeriod,
}

/// An invoice ready to be written to the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceObject {
    /// Object key, `<year>/<month>/<accountid>.json`
    pub key: String,
    /// UTF-8 JSON body
    pub body: Vec<u8>,
    /// Account the invoice belongs to
    pub account_id: String,
    /// Billing period the invoice is filed under
    pub billing_period: BillingPeriod,
}

impl InvoiceObject {
    /// Builds the invoice for an account and period, deriving its key
    #[must_use]
    pub fn new(account_id: &str, billing_period: BillingPeriod, body: Vec<u8>) -> Self {
        Self {
            key: format!("{billing_period}/{account_id}{JSON_SUFFIX}"),
            body,
            account_id: account_id.to_string(),
            billing_period,
        }
    }

    /// Metadata pairs stored alongside the object
    #[must_use]
    pub fn metadata(&self) -> [(String, String); 2] {
        [
            (
                InvoiceMetadataKey::AccountId.to_string(),
                self.account_id.clone(),
            ),
            (
                InvoiceMetadataKey::BillingPeriod.to_string(),
                self.billing_period.to_string(),
            ),
        ]
    }
}

/// Maps a client supplied object key to the stored JSON object key
#[must_use]
pub fn json_object_key(object_key: &str) -> String {
    format!("{object_key}{JSON_SUFFIX}")
}

/// Access to the invoice bucket
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Generates a presigned GET URL for `key`, valid for `expires_in`
    ///
    /// # Errors
    ///
    /// Returns `InvoiceStorageError` if the URL cannot be presigned
    async fn presign_get(&self, key: &str, expires_in: Duration) -> InvoiceStorageResult<String>;

    /// Writes the invoice, replacing any object under the same key
    ///
    /// # Errors
    ///
    /// Returns `InvoiceStorageError` if the write fails
    async fn put_invoice(&self, invoice: InvoiceObject) -> InvoiceStorageResult<()>;
}

/// Invoice storage client for S3 operations
pub struct InvoiceStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl InvoiceStorage {
    /// Creates a new invoice storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for invoices
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Name of the bucket this storage reads and writes
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

#[async_trait]
impl InvoiceStore for InvoiceStorage {
    async fn presign_get(&self, key: &str, expires_in: Duration) -> InvoiceStorageResult<String> {
        let presigned_config = PresigningConfig::expires_in(expires_in).map_err(|e| {
            InvoiceStorageError::ConfigError(format!("Failed to create presigning config: {e}"))
        })?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .presigned(presigned_config)
            .await
            .map_err(|e| {
                InvoiceStorageError::S3Error(format!("Failed to generate presigned URL: {e}"))
            })?;

        debug!(
            bucket = %self.bucket_name,
            key,
            expires_in_secs = expires_in.as_secs(),
            "Generated presigned GET URL"
        );

        Ok(presigned_request.uri().to_string())
    }

    async fn put_invoice(&self, invoice: InvoiceObject) -> InvoiceStorageResult<()> {
        let [account_id, billing_period] = invoice.metadata();

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&invoice.key)
            .content_type(JSON_CONTENT_TYPE)
            .metadata(account_id.0, account_id.1)
            .metadata(billing_period.0, billing_period.1)
            .body(ByteStream::from(invoice.body))
            .send()
            .await?;

        debug!(bucket = %self.bucket_name, key = %invoice.key, "Invoice written");

        Ok(())
    }
}
