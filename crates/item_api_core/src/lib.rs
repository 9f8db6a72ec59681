//! Shared invocation contract for the item key-value API.
//!
//! This crate owns the HTTP-shaped request/response types, the fault
//! taxonomy, and the fixed response bodies. It intentionally excludes
//! AWS SDK and Lambda runtime concerns.

pub mod contract;
