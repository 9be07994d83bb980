//! Order invoices in the invoice bucket

use chrono::{DateTime, Utc};
use order_storage::invoice::{BillingPeriod, InvoiceObject, InvoiceStore};
use order_storage::order::OrderEvent;
use serde_json::value::RawValue;
use tracing::info;

use super::WriteStatus;
use crate::types::{BillingPeriodSource, HandlerResult};

/// Files the raw order event as the account's invoice for the billing period
///
/// The object lands at `<year>/<month>/<accountid>.json` and replaces any
/// invoice already filed for the same account and period. The body is the
/// event text exactly as received. Returns the key that was written.
///
/// # Errors
///
/// Returns `HandlerError::InvalidOrder` if the event does not carry a well-formed order
/// Returns `HandlerError::InvalidOrderDate` if the period comes from an unparseable `orderdate`
/// Returns `HandlerError::InvoiceStorage` if the write fails
pub async fn put_order_object<S: InvoiceStore + ?Sized>(
    store: &S,
    event: &RawValue,
    period_source: BillingPeriodSource,
    now: DateTime<Utc>,
) -> HandlerResult<String> {
    let OrderEvent { order } = OrderEvent::from_raw(event)?;

    let billing_period = match period_source {
        BillingPeriodSource::Invocation => BillingPeriod::containing(now),
        BillingPeriodSource::OrderDate => BillingPeriod::from_order_date(&order.order_date)?,
    };

    let body = event.get().as_bytes().to_vec();
    let invoice = InvoiceObject::new(&order.account_id, billing_period, body);
    let key = invoice.key.clone();

    store.put_invoice(invoice).await?;

    info!(%key, %billing_period, account_id = %order.account_id, "Invoice stored");

    Ok(key)
}

/// Lambda adapter for [`put_order_object`]
///
/// Returns `"SUCCEED"` once the invoice is written and `"FAILED"` otherwise.
pub async fn handle_put_object<S: InvoiceStore + ?Sized>(
    store: &S,
    event: Box<RawValue>,
    period_source: BillingPeriodSource,
    now: DateTime<Utc>,
) -> WriteStatus {
    match put_order_object(store, &event, period_source, now).await {
        Ok(_) => WriteStatus::Succeed,
        Err(err) => {
            err.log("put_object");
            WriteStatus::Failed
        }
    }
}
