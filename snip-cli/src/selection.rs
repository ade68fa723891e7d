//! Line-range selection
//!
//! The CLI analog of copying an editor selection instead of the whole
//! buffer: `--lines START:END` restricts the snippet to a 1-based inclusive
//! line range. An empty selection is not an error; the command reports it
//! and aborts before anything is rendered.

use std::fmt;

/// A 1-based inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Parse a `START:END` range argument.
pub fn parse_line_range(raw: &str) -> Result<LineRange, String> {
    let (start_raw, end_raw) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{raw}'"))?;
    let start: usize = start_raw
        .parse()
        .map_err(|_| format!("invalid start line '{start_raw}'"))?;
    let end: usize = end_raw
        .parse()
        .map_err(|_| format!("invalid end line '{end_raw}'"))?;
    if start == 0 || end == 0 {
        return Err("line numbers are 1-based".to_string());
    }
    if start > end {
        return Err(format!("start line {start} is past end line {end}"));
    }
    Ok(LineRange { start, end })
}

/// Extract the selected lines from `content`.
///
/// Returns `None` when the range lies entirely past the end of the content
/// (nothing selected). A range reaching past the last line is clamped.
/// Selected lines are rejoined with `\n`; original line endings are not
/// preserved inside a selection.
pub fn select_lines(content: &str, range: LineRange) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    if range.start > lines.len() {
        return None;
    }
    let end = range.end.min(lines.len());
    Some(lines[range.start - 1..end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_range() {
        assert_eq!(parse_line_range("2:5"), Ok(LineRange { start: 2, end: 5 }));
        assert_eq!(parse_line_range("7:7"), Ok(LineRange { start: 7, end: 7 }));
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(parse_line_range("5").is_err());
        assert!(parse_line_range("a:b").is_err());
        assert!(parse_line_range("0:3").is_err());
        assert!(parse_line_range("5:2").is_err());
    }

    #[test]
    fn selects_inclusive_range() {
        let content = "one\ntwo\nthree\nfour\n";
        assert_eq!(
            select_lines(content, LineRange { start: 2, end: 3 }),
            Some("two\nthree".to_string())
        );
    }

    #[test]
    fn clamps_range_past_the_last_line() {
        let content = "one\ntwo\n";
        assert_eq!(
            select_lines(content, LineRange { start: 2, end: 9 }),
            Some("two".to_string())
        );
    }

    #[test]
    fn range_fully_past_the_end_selects_nothing() {
        let content = "one\ntwo\n";
        assert_eq!(select_lines(content, LineRange { start: 3, end: 5 }), None);
    }

    #[test]
    fn empty_content_selects_nothing() {
        assert_eq!(select_lines("", LineRange { start: 1, end: 1 }), None);
    }
}
