//! Evolution timeline parser.
//!
//! Extracts two things from EVOLUTION.md: the compliance-score trend
//! (every date/percentage pairing anywhere in the text) and the event
//! table, capped to the most recent entries.

use crate::models::{ComplianceSample, Timeline, TimelineEvent};
use crate::parsers::table::{header_has, table_rows};
use regex::Regex;
use std::sync::LazyLock;

/// Cap on the event list; older qualifying rows are dropped.
pub const MAX_RECENT_EVENTS: usize = 20;

/// A `YYYY-MM-DD` date followed by an integer percentage on the same line.
static COMPLIANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2}).*?(\d+)%").expect("valid compliance regex"));

/// Parse the full timeline text into compliance samples and recent events.
pub fn parse(text: &str) -> Timeline {
    Timeline {
        compliance_history: compliance_samples(text),
        events: recent_events(text),
    }
}

/// Every date/percentage co-occurrence, in document order, no dedup.
fn compliance_samples(text: &str) -> Vec<ComplianceSample> {
    COMPLIANCE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let score = caps[2].parse().ok()?;
            Some(ComplianceSample {
                date: caps[1].to_string(),
                score,
            })
        })
        .collect()
}

/// Rows of the table headed by a `Timestamp` cell, keeping the last
/// `MAX_RECENT_EVENTS`. Rows with fewer than four cells are dropped;
/// cells beyond the fourth are ignored.
fn recent_events(text: &str) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = table_rows(text, |cells| header_has(cells, &["Timestamp"]))
        .into_iter()
        .filter_map(|cells| {
            if cells.len() < 4 {
                log::debug!("dropping timeline row with {} cells", cells.len());
                return None;
            }
            let mut cells = cells.into_iter();
            Some(TimelineEvent {
                timestamp: cells.next()?,
                event: cells.next()?,
                agent: cells.next()?,
                ticket: cells.next()?,
            })
        })
        .collect();

    if events.len() > MAX_RECENT_EVENTS {
        events.drain(..events.len() - MAX_RECENT_EVENTS);
    }
    events
}
