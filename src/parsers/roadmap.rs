//! Roadmap parser.
//!
//! ROADMAP.md carries two independent tables: the item table (header has
//! both `ID` and `DUE` cells) and the milestone table (header has a
//! `Milestone` cell). Either may be absent without affecting the other.

use crate::models::{Milestone, Roadmap, RoadmapItem};
use crate::parsers::table::{header_has, table_rows};

/// Status value marking an item as completed, compared case-insensitively.
const DONE_STATUS: &str = "done";

/// Parse the full roadmap text against the given `today` date.
///
/// `today` must be in `YYYY-MM-DD` form: the overdue check is a plain
/// string comparison, which is only correct because that format is
/// fixed-width and lexicographically ordered. Malformed due-date strings
/// compare as ordinary text rather than as calendar dates.
pub fn parse(text: &str, today: &str) -> Roadmap {
    let items = parse_items(text);
    let overdue = items
        .iter()
        .filter(|item| is_overdue(item, today))
        .cloned()
        .collect();
    let milestones = parse_milestones(text);

    Roadmap {
        items,
        overdue,
        milestones,
    }
}

/// An item is overdue iff its due date has passed and it is not done.
/// Equal dates are never overdue.
fn is_overdue(item: &RoadmapItem, today: &str) -> bool {
    item.due.as_str() < today && !item.status.eq_ignore_ascii_case(DONE_STATUS)
}

fn parse_items(text: &str) -> Vec<RoadmapItem> {
    table_rows(text, |cells| header_has(cells, &["ID", "DUE"]))
        .into_iter()
        .filter_map(|cells| {
            if cells.len() < 5 {
                log::debug!("dropping roadmap row with {} cells", cells.len());
                return None;
            }
            let mut cells = cells.into_iter();
            Some(RoadmapItem {
                id: cells.next()?,
                title: cells.next()?,
                start: cells.next()?,
                due: cells.next()?,
                status: cells.next()?,
            })
        })
        .collect()
}

fn parse_milestones(text: &str) -> Vec<Milestone> {
    table_rows(text, |cells| header_has(cells, &["Milestone"]))
        .into_iter()
        .filter_map(|cells| {
            if cells.len() < 2 {
                return None;
            }
            let mut cells = cells.into_iter();
            Some(Milestone {
                name: cells.next()?,
                date: cells.next()?,
            })
        })
        .collect()
}
