#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use chrono::{DateTime, Utc};
use order_storage::invoice::{
    InvoiceObject, InvoiceStorageError, InvoiceStorageResult, InvoiceStore,
};
use order_storage::order::Order;
use order_storage::order_record::{OrderStorageError, OrderStorageResult, OrderTable};
use serde_json::value::RawValue;

/// In-memory order table recording every write
#[derive(Default)]
pub struct FakeOrderTable {
    pub writes: Mutex<Vec<Order>>,
    pub fail_with: Option<&'static str>,
}

impl FakeOrderTable {
    pub fn failing(reason: &'static str) -> Self {
        Self {
            fail_with: Some(reason),
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<Order> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderTable for FakeOrderTable {
    async fn put_order(&self, order: &Order) -> OrderStorageResult<()> {
        if let Some(reason) = self.fail_with {
            return Err(OrderStorageError::DynamoDbPutError(
                SdkError::construction_failure(reason),
            ));
        }
        self.writes.lock().unwrap().push(order.clone());
        Ok(())
    }
}

/// Presign request seen by the fake bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignCall {
    pub key: String,
    pub expires_in: Duration,
}

/// In-memory invoice bucket with last-writer-wins objects
#[derive(Default)]
pub struct FakeInvoiceStore {
    pub presigns: Mutex<Vec<PresignCall>>,
    pub puts: Mutex<Vec<InvoiceObject>>,
    pub fail_with: Option<&'static str>,
}

impl FakeInvoiceStore {
    pub fn failing(reason: &'static str) -> Self {
        Self {
            fail_with: Some(reason),
            ..Default::default()
        }
    }

    pub fn presigns(&self) -> Vec<PresignCall> {
        self.presigns.lock().unwrap().clone()
    }

    pub fn puts(&self) -> Vec<InvoiceObject> {
        self.puts.lock().unwrap().clone()
    }

    /// Current content of `key`, as a later write replaces an earlier one
    pub fn object(&self, key: &str) -> Option<InvoiceObject> {
        self.puts
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|invoice| invoice.key == key)
            .cloned()
    }
}

#[async_trait]
impl InvoiceStore for FakeInvoiceStore {
    async fn presign_get(&self, key: &str, expires_in: Duration) -> InvoiceStorageResult<String> {
        if let Some(reason) = self.fail_with {
            return Err(InvoiceStorageError::S3Error(reason.to_string()));
        }
        self.presigns.lock().unwrap().push(PresignCall {
            key: key.to_string(),
            expires_in,
        });
        Ok(format!("https://invoices.example.com/{key}?X-Amz-Signature=fake"))
    }

    async fn put_invoice(&self, invoice: InvoiceObject) -> InvoiceStorageResult<()> {
        if let Some(reason) = self.fail_with {
            return Err(InvoiceStorageError::S3Error(reason.to_string()));
        }
        self.puts.lock().unwrap().push(invoice);
        Ok(())
    }
}

/// Event text exactly as a caller would send it
pub fn raw(text: &str) -> Box<RawValue> {
    RawValue::from_string(text.to_string()).unwrap()
}

/// Text of a well-formed order event
///
/// `vendorid` comes before `accountid` so any re-serialization that sorts
/// keys shows up as a byte difference.
pub fn order_event_text(account_id: &str, vendor_id: &str) -> String {
    format!(
        r#"{{"order": {{"vendorid": "{vendor_id}", "accountid": "{account_id}", "orderdate": "2023-11-05", "city": "Seattle", "details": {{"coffeetype": "latte", "coffeesize": "medium", "unitprice": 4.5, "quantity": 2}}}}}}"#
    )
}

/// A well-formed order event
pub fn order_event(account_id: &str, vendor_id: &str) -> Box<RawValue> {
    raw(&order_event_text(account_id, vendor_id))
}

/// An order event whose numbers carry more digits than `f64` or `u64` hold
pub const LONG_NUMBER_EVENT: &str = r#"{"order": {"vendorid": "vendor9", "accountid": "acct1", "orderdate": "2023-11-05", "city": "Seattle", "details": {"coffeetype": "latte", "coffeesize": "medium", "unitprice": 4.123456789012345678901, "quantity": 123456789012345678901234}}}"#;

/// UTC instant inside the given month
pub fn instant_in(year: i32, month: u32) -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()
}
