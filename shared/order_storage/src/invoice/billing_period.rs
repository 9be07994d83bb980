//! Billing period derivation for invoice objects

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::BillingPeriodError;

/// Calendar month an invoice belongs to
///
/// Rendered as `<year>/<month>` without zero-padding, e.g. `2024/3`. The same
/// string is used as the object key prefix and as the `billingperiod` metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Billing period containing the given instant
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// Billing period of an order date
    ///
    /// Accepts RFC 3339 timestamps (`2024-03-14T09:30:00Z`) and plain
    /// `YYYY-MM-DD` dates. Timestamps with an offset are taken in UTC.
    ///
    /// # Errors
    ///
    /// Returns `BillingPeriodError` if the date matches neither format
    pub fn from_order_date(order_date: &str) -> Result<Self, BillingPeriodError> {
        let trimmed = order_date.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::containing(timestamp.with_timezone(&Utc)));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|date| Self {
                year: date.year(),
                month: date.month(),
            })
            .map_err(|_| BillingPeriodError(order_date.to_string()))
    }

    /// Calendar year
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1-based
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.month)
    }
}
