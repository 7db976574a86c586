//! Tools domain module.
//!
//! Tools are thin forwarding wrappers around the DC Hub REST backend. Each
//! one normalises its parameters, records an audit entry, calls the backend
//! and returns the payload as pretty-printed JSON text.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per tool, each implementing `ToolDefinition`
//! - `router.rs` - rmcp `ToolRouter` builder for the STDIO transport
//! - `registry.rs` - Name-to-handler table used by the HTTP transport
//! - `services.rs` - Backend client and audit sink shared by handlers
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolDefinition`
//! 2. Export in `definitions/mod.rs`
//! 3. Add it to `registry.rs` and `router.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;
mod services;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use services::ToolServices;
