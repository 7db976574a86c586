//! Audit log of tool invocations.
//!
//! Every tool call appends one [`InvocationRecord`] through the
//! [`AuditSink`]. The sink is best-effort: writes run on a detached blocking
//! task, and any failure is logged and dropped so it can never change a
//! tool's result or latency.
//!
//! Storage sits behind the [`AuditStore`] trait; [`SqliteAuditStore`] is the
//! default implementation.

mod error;
mod record;
mod sink;
mod store;

pub use error::AuditError;
pub use record::InvocationRecord;
pub use sink::AuditSink;
pub use store::{AuditStore, SqliteAuditStore};
