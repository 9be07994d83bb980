mod environment;
mod error;

pub use environment::{BillingPeriodSource, Environment};
pub use error::{HandlerError, HandlerResult};
