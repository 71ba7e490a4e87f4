//! Activity journal parser.
//!
//! The journal is a sequence of `key: value` blocks separated by `---`
//! lines. Each block with an `agent:` field counts one activity for that
//! agent; blocks flagged `shape_shift: true` surface their `truth:` text
//! in the report. When a field repeats inside a block, the first match
//! wins.

use crate::models::ActivitySummary;
use regex::Regex;
use std::sync::LazyLock;

static AGENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"agent:\s*(\S+)").expect("valid agent regex"));
static TRUTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"truth:\s*(.+)").expect("valid truth regex"));

/// Marker flagging a block whose truth represents a significant change.
const SHAPE_SHIFT_MARKER: &str = "shape_shift: true";

/// Parse the full journal text into per-agent counts and shape-shift truths.
pub fn parse(text: &str) -> ActivitySummary {
    let mut summary = ActivitySummary::default();

    for block in split_blocks(text) {
        if block.trim().is_empty() {
            continue;
        }

        if let Some(caps) = AGENT_RE.captures(&block) {
            *summary.agents.entry(caps[1].to_string()).or_insert(0) += 1;
        }

        if block.contains(SHAPE_SHIFT_MARKER)
            && let Some(caps) = TRUTH_RE.captures(&block)
        {
            summary.shape_shifts.push(caps[1].trim().to_string());
        }
    }

    summary.total_truths = summary.agents.values().sum();
    summary
}

/// Split the journal on lines containing exactly the `---` separator.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = vec![String::new()];
    for line in text.lines() {
        if line.trim() == "---" {
            blocks.push(String::new());
        } else if let Some(current) = blocks.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_total() {
        let text = "agent: alpha\n---\nagent: beta\n---\nagent: alpha\n";
        let summary = parse(text);
        assert_eq!(summary.agents["alpha"], 2);
        assert_eq!(summary.agents["beta"], 1);
        assert_eq!(summary.total_truths, 3);
    }

    #[test]
    fn test_shape_shift_truth_is_collected() {
        let text = "agent: alpha\ntruth: x is true\nshape_shift: true\n---\nagent: alpha\n";
        let summary = parse(text);
        assert_eq!(summary.agents["alpha"], 2);
        assert_eq!(summary.total_truths, 2);
        assert_eq!(summary.shape_shifts, vec!["x is true"]);
    }

    #[test]
    fn test_unflagged_truth_is_not_collected() {
        let text = "agent: alpha\ntruth: quiet observation\n";
        let summary = parse(text);
        assert!(summary.shape_shifts.is_empty());
    }

    #[test]
    fn test_flagged_block_without_truth_contributes_nothing() {
        let text = "agent: alpha\nshape_shift: true\n";
        let summary = parse(text);
        assert!(summary.shape_shifts.is_empty());
        assert_eq!(summary.total_truths, 1);
    }

    #[test]
    fn test_block_without_agent_is_not_counted() {
        let text = "note: just prose\n---\nagent: alpha\n";
        let summary = parse(text);
        assert_eq!(summary.agents.len(), 1);
        assert_eq!(summary.total_truths, 1);
    }

    #[test]
    fn test_first_agent_field_wins() {
        let text = "agent: alpha\nagent: beta\n";
        let summary = parse(text);
        assert_eq!(summary.agents["alpha"], 1);
        assert!(!summary.agents.contains_key("beta"));
    }

    #[test]
    fn test_agent_order_is_first_appearance() {
        let text = "agent: zulu\n---\nagent: alpha\n---\nagent: zulu\n";
        let summary = parse(text);
        let order: Vec<&String> = summary.agents.keys().collect();
        assert_eq!(order, vec!["zulu", "alpha"]);
    }

    #[test]
    fn test_empty_text() {
        let summary = parse("");
        assert!(summary.agents.is_empty());
        assert!(summary.shape_shifts.is_empty());
        assert_eq!(summary.total_truths, 0);
    }
}
