//! Order records in the order table

use order_storage::order::{Order, OrderEvent};
use order_storage::order_record::OrderTable;
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::{debug, info};

use super::WriteStatus;
use crate::types::HandlerResult;

/// Output of the record-write function
///
/// Serializes as the input event, byte for byte, or as the bare status string.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PutItemOutput {
    /// The event exactly as received
    Echo(Box<RawValue>),
    /// Failure sentinel
    Status(WriteStatus),
}

/// Parses the order out of `event` and writes it to the order table
///
/// # Errors
///
/// Returns `HandlerError::InvalidOrder` if any order field is missing or mistyped
/// Returns `HandlerError::OrderStorage` if the write fails
pub async fn put_order_item<T: OrderTable + ?Sized>(
    table: &T,
    event: &RawValue,
) -> HandlerResult<Order> {
    let OrderEvent { order } = OrderEvent::from_raw(event)?;

    table.put_order(&order).await?;

    info!(
        account_id = %order.account_id,
        vendor_id = %order.vendor_id,
        "Order record stored"
    );

    Ok(order)
}

/// Lambda adapter for [`put_order_item`]
///
/// Echoes the event unchanged on success and returns `"FAILED"` otherwise.
pub async fn handle_put_item<T: OrderTable + ?Sized>(
    table: &T,
    event: Box<RawValue>,
) -> PutItemOutput {
    debug!(%event, "Received order event");

    match put_order_item(table, &event).await {
        Ok(_) => PutItemOutput::Echo(event),
        Err(err) => {
            err.log("put_item");
            PutItemOutput::Status(WriteStatus::Failed)
        }
    }
}
