//! Command implementations for the Sextant CLI.
//!
//! `report` is the aggregator: it resolves the three document paths under a
//! project root, invokes the parsers, and assembles the final
//! `MetricsReport`. It contains no parsing logic of its own.

use crate::models::MetricsReport;
use crate::parsers::{activity, roadmap, timeline};
use crate::Result;
use chrono::{Local, Utc};
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Activity journal, directly under the project root.
pub const ACTIVITY_JOURNAL: &str = ".remembrance";
/// Sub-directory holding the planning documents.
pub const PLANNING_DIR: &str = "scrum";
/// Evolution timeline, under the planning directory.
pub const TIMELINE_DOC: &str = "EVOLUTION.md";
/// Roadmap, under the planning directory.
pub const ROADMAP_DOC: &str = "ROADMAP.md";

/// Build the metrics report for the project rooted at `root`.
///
/// A missing document yields an empty section; any other read failure
/// (permission denied, non-UTF-8 content) aborts the run. Each invocation
/// recomputes from scratch; nothing persists between runs.
pub fn report(root: &Path) -> Result<MetricsReport> {
    let activity = match read_document(&root.join(ACTIVITY_JOURNAL))? {
        Some(text) => activity::parse(&text),
        None => Default::default(),
    };

    let timeline = match read_document(&root.join(PLANNING_DIR).join(TIMELINE_DOC))? {
        Some(text) => timeline::parse(&text),
        None => Default::default(),
    };

    // Due dates are compared as YYYY-MM-DD strings against the local date.
    let today = Local::now().format("%Y-%m-%d").to_string();
    let roadmap = match read_document(&root.join(PLANNING_DIR).join(ROADMAP_DOC))? {
        Some(text) => roadmap::parse(&text, &today),
        None => Default::default(),
    };

    Ok(MetricsReport {
        timestamp: Utc::now(),
        agent_activity: activity.agents,
        total_truths: activity.total_truths,
        shape_shifts: activity.shape_shifts,
        compliance_history: timeline.compliance_history,
        recent_events: timeline.events,
        roadmap_items: roadmap.items.len(),
        overdue_items: roadmap.overdue,
        milestones: roadmap.milestones,
    })
}

/// Read one source document, treating absence as `None`.
fn read_document(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("document not found, using empty section: {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Render a report as a human-readable summary.
pub fn render_human(report: &MetricsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Metrics generated {}", report.timestamp.to_rfc3339());
    let _ = writeln!(out, "\nAgent activity ({} truths):", report.total_truths);
    for (agent, count) in &report.agent_activity {
        let _ = writeln!(out, "  {agent}: {count}");
    }
    if !report.shape_shifts.is_empty() {
        let _ = writeln!(out, "\nShape-shifts:");
        for truth in &report.shape_shifts {
            let _ = writeln!(out, "  - {truth}");
        }
    }
    if let Some(sample) = report.compliance_history.last() {
        let _ = writeln!(
            out,
            "\nCompliance: {}% as of {} ({} samples)",
            sample.score,
            sample.date,
            report.compliance_history.len()
        );
    }
    let _ = writeln!(out, "\nRecent events: {}", report.recent_events.len());
    for event in &report.recent_events {
        let _ = writeln!(
            out,
            "  {} {} [{}] {}",
            event.timestamp, event.event, event.agent, event.ticket
        );
    }
    let _ = writeln!(
        out,
        "\nRoadmap: {} items, {} overdue",
        report.roadmap_items,
        report.overdue_items.len()
    );
    for item in &report.overdue_items {
        let _ = writeln!(out, "  OVERDUE {} {} (due {})", item.id, item.title, item.due);
    }
    for milestone in &report.milestones {
        let _ = writeln!(out, "  Milestone {}: {}", milestone.name, milestone.date);
    }
    out
}
