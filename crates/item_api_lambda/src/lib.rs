//! AWS-oriented adapters and handlers for the item key-value API.
//!
//! This crate owns runtime integration details (the Lambda request
//! router and the DynamoDB storage adapter); the invocation contract
//! lives in `item_api_core`.

pub mod adapters;
pub mod handlers;
