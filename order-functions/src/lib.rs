//! Coffee order functions
//!
//! Three independent Lambda handlers: presigning invoice download URLs,
//! writing order records to `DynamoDB` and filing order invoices in S3.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Handler cores and their Lambda wire adapters
pub mod handlers;

/// Environment configuration and error types
pub mod types;
