//! Audit storage backends.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, params};

use super::{AuditError, InvocationRecord};

/// Append-only destination for invocation records.
///
/// Implementations are called from a blocking worker and may be called
/// concurrently; serializing concurrent appends is their responsibility.
pub trait AuditStore: Send + Sync {
    /// Append one record.
    fn append(&self, record: &InvocationRecord) -> Result<(), AuditError>;
}

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS mcp_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT,
    tool TEXT,
    params TEXT,
    source TEXT
)";

const INSERT_RECORD: &str =
    "INSERT INTO mcp_requests (timestamp, tool, params, source) VALUES (?1, ?2, ?3, ?4)";

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed audit log.
///
/// Opens a fresh connection per append and makes sure the table exists
/// first, so no provisioning step is needed and a missing or locked file
/// only costs the one record.
#[derive(Debug, Clone)]
pub struct SqliteAuditStore {
    path: PathBuf,
}

impl SqliteAuditStore {
    /// Create a store writing to the database at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection, AuditError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(CREATE_TABLE)?;
        Ok(conn)
    }
}

impl AuditStore for SqliteAuditStore {
    fn append(&self, record: &InvocationRecord) -> Result<(), AuditError> {
        let conn = self.open()?;
        conn.execute(
            INSERT_RECORD,
            params![
                record.timestamp_text(),
                record.tool_name,
                record.parameters,
                record.source,
            ],
        )?;
        Ok(())
    }
}
