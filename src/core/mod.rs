//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, error handling, the request-scoped caller context, the
//! backend client, the audit sink, server lifecycle and transports.

pub mod audit;
pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use context::{Credential, RequestContext};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
