//! Fire-and-forget audit sink.

use std::sync::Arc;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{AuditStore, InvocationRecord, SqliteAuditStore};
use crate::core::config::AuditConfig;

/// Records tool invocations without ever failing or delaying the caller.
#[derive(Clone)]
pub struct AuditSink {
    store: Option<Arc<dyn AuditStore>>,
    source: String,
}

impl AuditSink {
    /// Sink writing to `store`, tagging records with `source`.
    pub fn new(store: Arc<dyn AuditStore>, source: impl Into<String>) -> Self {
        Self {
            store: Some(store),
            source: source.into(),
        }
    }

    /// Sink that drops every record.
    pub fn disabled() -> Self {
        Self {
            store: None,
            source: String::new(),
        }
    }

    /// Build the sink described by configuration.
    pub fn from_config(config: &AuditConfig) -> Self {
        if config.enabled {
            Self::new(
                Arc::new(SqliteAuditStore::new(&config.db_path)),
                config.source.clone(),
            )
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Record one invocation of `tool_name`.
    ///
    /// The write runs on a detached blocking task. The returned handle may be
    /// awaited (tests do) or dropped (handlers do); either way, failures are
    /// logged at `warn` and go no further.
    pub fn record<P>(&self, tool_name: &str, parameters: &P) -> Option<JoinHandle<()>>
    where
        P: Serialize + ?Sized,
    {
        let store = self.store.clone()?;

        let record = match InvocationRecord::new(tool_name, parameters, &self.source) {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to track MCP request: {}", e);
                return None;
            }
        };

        let write = move || {
            match store.append(&record) {
                Ok(()) => debug!("Tracked MCP request: {}", record.tool_name),
                Err(e) => warn!("Failed to track MCP request: {}", e),
            }
        };

        match Handle::try_current() {
            Ok(handle) => Some(handle.spawn_blocking(write)),
            Err(_) => {
                write();
                None
            }
        }
    }
}

impl std::fmt::Debug for AuditSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditSink")
            .field("enabled", &self.is_enabled())
            .field("source", &self.source)
            .finish()
    }
}
