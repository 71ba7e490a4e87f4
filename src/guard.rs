//! Governance guard: blocks agent writes into the protected directory.
//!
//! Governance files are user-only. The guard receives a pending write's
//! target path (environment variable or JSON on stdin), checks whether it
//! falls inside the governance directory, and records the decision in the
//! audit log. The decision itself is a lexical containment check; no file
//! needs to exist yet.

use crate::audit_log::{self, AuditEntry};
use serde::Deserialize;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

/// Protected directory, relative to the project root.
pub const GOVERNANCE_DIR: &str = ".governance";

/// Operation label recorded for guarded writes.
const OPERATION: &str = "WRITE";

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block,
}

impl Decision {
    /// Audit-log status label.
    pub fn status(self) -> &'static str {
        match self {
            Decision::Allow => "ALLOWED",
            Decision::Block => "BLOCKED",
        }
    }
}

/// Tool input as passed on stdin by the hook harness.
#[derive(Debug, Deserialize)]
struct ToolInput {
    #[serde(default)]
    file_path: Option<String>,
}

/// Resolve the target path of the pending write, if any.
///
/// Checks the `TOOL_INPUT_FILE_PATH` environment variable first, then a
/// JSON object on `input` with a `file_path` key. Unparsable input is
/// treated the same as no input: there is nothing to guard.
pub fn resolve_target(input: &mut impl Read) -> Option<PathBuf> {
    if let Ok(path) = std::env::var("TOOL_INPUT_FILE_PATH")
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }

    let mut buf = String::new();
    input.read_to_string(&mut buf).ok()?;
    let parsed: ToolInput = serde_json::from_str(&buf).ok()?;
    parsed.file_path.filter(|p| !p.is_empty()).map(PathBuf::from)
}

/// Decide whether a write to `target` is allowed under `root`.
pub fn check(root: &Path, target: &Path) -> Decision {
    let governance = normalize(&root.join(GOVERNANCE_DIR), root);
    if normalize(target, root).starts_with(&governance) {
        Decision::Block
    } else {
        Decision::Allow
    }
}

/// Decide and record: run the containment check, then append one audit
/// line for the decision.
pub fn check_and_log(root: &Path, target: &Path) -> Decision {
    let decision = check(root, target);
    let filename = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.to_string_lossy().into_owned());
    audit_log::log_decision(root, &AuditEntry::now(OPERATION, &filename, decision.status()));
    decision
}

/// Message printed on stderr when a write is blocked.
pub fn block_message(target: &Path) -> String {
    format!(
        "BLOCKED: governance files are user-only and cannot be modified by agents.\n\
         Target: {}\n\
         To change governance content, edit the file directly as the user.",
        target.display()
    )
}

/// Lexically normalize `path`: anchor relative paths at `root` and
/// resolve `.` and `..` components without touching the filesystem, so
/// the check also covers paths that do not exist yet.
fn normalize(path: &Path, root: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
