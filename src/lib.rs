//! DC Hub MCP Gateway
//!
//! A Model Context Protocol (MCP) server that exposes data center
//! intelligence (facilities, transactions, markets, news, site analysis) as
//! tools backed by the DC Hub REST API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the request-scoped caller
//!   context, the backend client, the audit sink, the server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: six forwarding tools, one per backend endpoint
//!   - **resources**: server info and tool catalog documents
//!   - **prompts**: analyst prompt templates
//!
//! The HTTP transport reads the caller's API key (`X-API-Key` header or
//! `api_key` query parameter) and scopes it to that one request; the backend
//! client forwards it on every outbound call made while serving the request.
//!
//! # Example
//!
//! ```rust,no_run
//! use dchub_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
