//! Backend client for the DC Hub REST API.
//!
//! Every tool forwards to the same HTTP+JSON backend. This module owns the
//! single outbound path:
//! - `client.rs` - URL construction, credential forwarding, timeout
//! - `query.rs` - query parameter mapping with the "drop falsy" policy
//! - `error.rs` - the uniform `{error: ...}` failure shape
//!
//! Failures never escape as faults: callers receive a [`BackendResult`] and
//! turn an `Err` into data with [`BackendError::to_payload`].

mod client;
mod error;
mod query;

pub use client::{API_KEY_HEADER, BackendClient};
pub use error::{BackendError, BackendResult};
pub use query::{QueryParams, is_falsy};
