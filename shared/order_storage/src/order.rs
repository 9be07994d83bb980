//! Coffee order data model shared by the order functions

use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::value::RawValue;
use strum::Display;

/// Event envelope delivered to the order write functions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderEvent {
    /// The order being placed
    pub order: Order,
}

impl OrderEvent {
    /// Parses the order out of the raw event text
    ///
    /// Numbers keep their original digits, so the event has to be read from
    /// JSON text rather than from an already parsed `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if any order field is missing or mistyped
    pub fn from_raw(event: &RawValue) -> serde_json::Result<Self> {
        serde_json::from_str(event.get())
    }
}

/// A coffee order placed by an account with a vendor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    /// Account placing the order (table partition key)
    #[serde(rename = "accountid")]
    pub account_id: String,
    /// Vendor fulfilling the order (table sort key)
    #[serde(rename = "vendorid")]
    pub vendor_id: String,
    /// Date the order was placed, as sent by the client
    #[serde(rename = "orderdate")]
    pub order_date: String,
    /// City the order ships to
    pub city: String,
    /// Line details of the order
    pub details: OrderDetails,
}

/// Line details of a coffee order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderDetails {
    /// Coffee type, e.g. `latte`
    #[serde(rename = "coffeetype")]
    pub coffee_type: String,
    /// Cup size, e.g. `medium`
    #[serde(rename = "coffeesize")]
    pub coffee_size: String,
    /// Price of a single unit
    #[serde(rename = "unitprice")]
    pub unit_price: DecimalNumber,
    /// Number of units ordered
    pub quantity: DecimalNumber,
}

/// A JSON number kept as the exact text the client sent
///
/// `DynamoDB` numbers carry up to 38 significant digits, more than `f64` or
/// `u64` can hold, so the digits are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalNumber(String);

impl DecimalNumber {
    /// The number's digits as sent
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DecimalNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get().trim();

        // A raw JSON value is a number exactly when it opens with a sign or digit
        if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            Ok(Self(text.to_string()))
        } else {
            Err(D::Error::custom(format!("expected a JSON number, found {text}")))
        }
    }
}

/// `DynamoDB` attribute names for the order table
#[derive(Debug, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OrderAttribute {
    /// Partition key
    AccountId,
    /// Sort key
    VendorId,
    /// Order date
    OrderDate,
    /// Destination city
    City,
    /// Nested order details map
    Details,
    /// Coffee type (inside `details`)
    CoffeeType,
    /// Coffee size (inside `details`)
    CoffeeSize,
    /// Unit price (inside `details`)
    UnitPrice,
    /// Quantity (inside `details`)
    Quantity,
}
