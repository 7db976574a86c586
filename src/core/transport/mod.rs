//! Transport layer for the MCP server.
//!
//! This module provides the transport implementations:
//! - **HTTP**: JSON-RPC over POST, the production mode - feature: `http`.
//!   The caller's API key is captured here and scoped to the request.
//! - **STDIO**: standard input/output - feature: `stdio`. Calls are anonymous.
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod credential;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
