//! Typed records produced by the document parsers and the final report.
//!
//! Every record is built fresh from the current file contents on each run;
//! nothing here persists between invocations.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One (date, score) pairing found in the evolution timeline.
///
/// A sample is any `YYYY-MM-DD` date followed by an integer percentage
/// on the same line; samples are kept in document order without dedup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSample {
    /// Date in `YYYY-MM-DD` form, as written in the document
    pub date: String,
    /// Integer percentage score
    pub score: u32,
}

/// One row of the timeline's event table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Timestamp cell, kept in the document's native format
    pub timestamp: String,
    /// Event description cell
    pub event: String,
    /// Agent responsible for the event
    pub agent: String,
    /// Ticket reference cell
    pub ticket: String,
}

/// One row of the roadmap's item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    /// Start date in `YYYY-MM-DD` form
    pub start: String,
    /// Due date in `YYYY-MM-DD` form
    pub due: String,
    /// Free-form status; "done" (any case) means completed
    pub status: String,
}

/// One row of the roadmap's milestone table, unrelated to individual items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub date: String,
}

/// Parsed activity journal: per-agent counts and flagged shape-shift truths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Agent identifier -> number of journal blocks, in first-appearance order
    pub agents: IndexMap<String, u64>,
    /// Trimmed truth texts from blocks flagged `shape_shift: true`
    pub shape_shifts: Vec<String>,
    /// Sum of all agent counts
    pub total_truths: u64,
}

/// Parsed evolution timeline: compliance trend plus recent events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub compliance_history: Vec<ComplianceSample>,
    /// At most the last 20 qualifying event rows, most-recent-last
    pub events: Vec<TimelineEvent>,
}

/// Parsed roadmap: all items, the overdue subset, and milestones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub items: Vec<RoadmapItem>,
    pub overdue: Vec<RoadmapItem>,
    pub milestones: Vec<Milestone>,
}

/// The final aggregate emitted by `sx report`.
///
/// Immutable once produced; two runs against unchanged documents differ
/// only in `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Generation timestamp (UTC)
    pub timestamp: DateTime<Utc>,
    /// Agent identifier -> activity count, first-appearance order
    pub agent_activity: IndexMap<String, u64>,
    /// Sum of agent activity counts
    pub total_truths: u64,
    /// Shape-shift truth texts, in journal order
    pub shape_shifts: Vec<String>,
    /// Compliance samples in document order
    pub compliance_history: Vec<ComplianceSample>,
    /// At most 20 events, most-recent-last
    pub recent_events: Vec<TimelineEvent>,
    /// Total number of parsed roadmap items
    pub roadmap_items: usize,
    /// Items past their due date and not done
    pub overdue_items: Vec<RoadmapItem>,
    pub milestones: Vec<Milestone>,
}
