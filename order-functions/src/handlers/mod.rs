//! Order function handlers
//!
//! Each handler has a core returning a typed `HandlerResult` and a wire
//! adapter that maps the result onto the response shape its caller expects.

mod invoice_url;
mod put_item;
mod put_object;

use serde::Serialize;
use strum::Display;

pub use invoice_url::{handle_invoice_url_request, presign_invoice_url, OBJECT_KEY_PARAM};
pub use put_item::{handle_put_item, put_order_item, PutItemOutput};
pub use put_object::{handle_put_object, put_order_object};

/// Status string returned by the write handlers
///
/// The orchestrating workflow compares the output against `"FAILED"`, so the
/// rendered values are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum WriteStatus {
    /// The write was accepted by the backend
    Succeed,
    /// The input was malformed or the backend call failed
    Failed,
}
