//! Append-only audit logging for governance guard decisions.
//!
//! Every decision about a concrete file path appends one pipe-delimited
//! line to the audit log. Logging never fails the calling command: on
//! error it warns on stderr and the decision stands unchanged.

use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Audit log location, relative to the project root.
pub const AUDIT_LOG: &str = ".governance/.audit-log";

/// One audit line: `timestamp | operation | filename | actor | status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// ISO 8601 timestamp of the decision (UTC)
    pub timestamp: String,
    /// Operation that was checked, e.g. `WRITE`
    pub operation: String,
    /// Base name of the target file
    pub filename: String,
    /// Who attempted the operation
    pub actor: String,
    /// `ALLOWED` or `BLOCKED`
    pub status: String,
}

impl AuditEntry {
    /// Build an entry for the current moment and actor.
    pub fn now(operation: &str, filename: &str, status: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            operation: operation.to_string(),
            filename: filename.to_string(),
            actor: current_actor(),
            status: status.to_string(),
        }
    }

    /// Render the fixed-width pipe-delimited log line.
    fn render(&self) -> String {
        format!(
            "{} | {:<6} | {:<30} | {:<20} | {}",
            self.timestamp, self.operation, self.filename, self.actor, self.status
        )
    }
}

/// Append one decision to the audit log under `root`.
///
/// Creates the log's parent directory on first use. Errors are reported
/// as warnings and otherwise swallowed.
pub fn log_decision(root: &Path, entry: &AuditEntry) {
    let path = root.join(AUDIT_LOG);
    if let Err(e) = append_line(&path, &entry.render()) {
        eprintln!("Warning: failed to write audit log: {e}");
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

/// Resolve the acting identity: agent id env var, then login user, then
/// "unknown".
fn current_actor() -> String {
    std::env::var("SX_AGENT_ID")
        .or_else(|_| std::env::var("USER"))
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
