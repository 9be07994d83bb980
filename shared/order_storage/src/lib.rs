//! Storage services for coffee orders
//!
//! This crate wraps the two managed stores the order functions write to:
//! the `DynamoDB` order table and the S3 invoice bucket. Each store is exposed
//! through a trait so handlers can be exercised against in-memory fakes.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]

pub mod invoice;
pub mod order;
pub mod order_record;
