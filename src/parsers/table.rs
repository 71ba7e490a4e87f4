//! Markdown-style table scanning shared by the timeline and roadmap parsers.
//!
//! Table extraction is a small two-state machine: scan line by line for a
//! header row matching a caller-supplied predicate, then collect every
//! `|`-prefixed row after it, skipping separator rows. A document may hold
//! several tables; each scan targets one header shape and ignores the rest.

/// Scanner state. Explicit rather than a boolean so the table-boundary
/// transitions are testable on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekingHeader,
    InTable,
}

/// Split one table row into trimmed cells.
///
/// Splits on `|` and drops the leading/trailing empty cells produced by the
/// delimiter at the line edges. Interior empty cells are kept.
pub fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

/// A row containing the `---` dash run is a header/body separator.
fn is_separator(line: &str) -> bool {
    line.contains("---")
}

/// Collect the cell rows of the table whose header satisfies `is_header`.
///
/// Rows before the header (or in documents with no matching header) yield
/// nothing. After the header, every line starting with `|` that is not a
/// separator becomes one row of trimmed cells; intervening prose lines are
/// ignored. Cell-count requirements are left to the caller.
pub fn table_rows<F>(text: &str, is_header: F) -> Vec<Vec<String>>
where
    F: Fn(&[String]) -> bool,
{
    let mut state = State::SeekingHeader;
    let mut rows = Vec::new();

    for line in text.lines() {
        if !line.starts_with('|') {
            continue;
        }
        match state {
            State::SeekingHeader => {
                if is_header(&split_row(line)) {
                    state = State::InTable;
                }
            }
            State::InTable => {
                if !is_separator(line) {
                    rows.push(split_row(line));
                }
            }
        }
    }

    rows
}

/// Convenience predicate: does the header contain every named cell?
pub fn header_has(cells: &[String], wanted: &[&str]) -> bool {
    wanted.iter().all(|w| cells.iter().any(|c| c == w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_drops_edge_cells() {
        assert_eq!(split_row("| a | b |"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_row_keeps_interior_empty_cells() {
        assert_eq!(split_row("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_row_without_trailing_pipe() {
        assert_eq!(split_row("| a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_rows_before_header_are_skipped() {
        let text = "| stray | row |\n| Name | Date |\n|---|---|\n| m1 | 2025-01-01 |\n";
        let rows = table_rows(text, |cells| header_has(cells, &["Name"]));
        assert_eq!(rows, vec![vec!["m1", "2025-01-01"]]);
    }

    #[test]
    fn test_separator_rows_are_skipped() {
        let text = "| Name |\n|------|\n| a |\n| --- |\n| b |\n";
        let rows = table_rows(text, |cells| header_has(cells, &["Name"]));
        assert_eq!(rows, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_no_matching_header_yields_nothing() {
        let text = "| Other | Header |\n|---|---|\n| a | b |\n";
        let rows = table_rows(text, |cells| header_has(cells, &["Name"]));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_prose_between_rows_is_ignored() {
        let text = "| Name |\n|---|\nsome prose\n| a |\n";
        let rows = table_rows(text, |cells| header_has(cells, &["Name"]));
        assert_eq!(rows, vec![vec!["a"]]);
    }
}
