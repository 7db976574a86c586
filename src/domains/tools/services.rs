//! Collaborators shared by every tool handler.

use crate::core::Config;
use crate::core::audit::AuditSink;
use crate::core::backend::{BackendClient, BackendError};

/// Backend client and audit sink handed to each tool invocation.
///
/// Handlers share nothing else; both members are cheap to clone and safe to
/// use from concurrent invocations.
#[derive(Debug, Clone)]
pub struct ToolServices {
    /// Client for the REST backend.
    pub backend: BackendClient,

    /// Best-effort invocation log.
    pub audit: AuditSink,
}

impl ToolServices {
    pub fn new(backend: BackendClient, audit: AuditSink) -> Self {
        Self { backend, audit }
    }

    /// Build the services described by configuration.
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new(&config.backend)?,
            audit: AuditSink::from_config(&config.audit),
        })
    }
}
