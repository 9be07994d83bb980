//! Order table storage module for `DynamoDB` operations
//!
//! One record per order, addressed by the table's own key schema
//! (`accountid` partition key, `vendorid` sort key). Writes are unconditional
//! so a repeated (account, vendor) pair overwrites the previous record.

mod error;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
pub use error::{OrderStorageError, OrderStorageResult};
use tracing::debug;

use crate::order::{Order, OrderAttribute};

/// Write access to the order table
#[async_trait]
pub trait OrderTable: Send + Sync {
    /// Writes the order as a single record, replacing any record with the same key
    ///
    /// # Errors
    ///
    /// Returns `OrderStorageError` if the write fails
    async fn put_order(&self, order: &Order) -> OrderStorageResult<()>;
}

/// Converts an order into the `DynamoDB` item written to the table
///
/// The item carries exactly the order's nine fields, with the four line
/// details nested under `details`. Prices and quantities are written as `N`
/// with the digits the client sent.
#[must_use]
pub fn to_order_item(order: &Order) -> HashMap<String, AttributeValue> {
    let string = |value: &str| AttributeValue::S(value.to_string());
    let details = &order.details;

    let details_map = HashMap::from([
        (
            OrderAttribute::CoffeeType.to_string(),
            string(&details.coffee_type),
        ),
        (
            OrderAttribute::CoffeeSize.to_string(),
            string(&details.coffee_size),
        ),
        (
            OrderAttribute::UnitPrice.to_string(),
            AttributeValue::N(details.unit_price.to_string()),
        ),
        (
            OrderAttribute::Quantity.to_string(),
            AttributeValue::N(details.quantity.to_string()),
        ),
    ]);

    HashMap::from([
        (OrderAttribute::AccountId.to_string(), string(&order.account_id)),
        (OrderAttribute::VendorId.to_string(), string(&order.vendor_id)),
        (OrderAttribute::OrderDate.to_string(), string(&order.order_date)),
        (OrderAttribute::City.to_string(), string(&order.city)),
        (
            OrderAttribute::Details.to_string(),
            AttributeValue::M(details_map),
        ),
    ])
}

/// Storage client for the order table
pub struct OrderRecordStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl OrderRecordStorage {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for orders
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Name of the table this storage writes to
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl OrderTable for OrderRecordStorage {
    async fn put_order(&self, order: &Order) -> OrderStorageResult<()> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_order_item(order)))
            .send()
            .await?;

        debug!(
            table = %self.table_name,
            account_id = %order.account_id,
            vendor_id = %order.vendor_id,
            "Order record written"
        );

        Ok(())
    }
}
