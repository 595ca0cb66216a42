//! Suppression / Inclusion Filter: matches
//! `(file, line:col, kind)` tags produced by the walk against user-supplied
//! lists, dropping or restricting diagnostics and tracking which entries
//! went unused.

use crate::mistake::MistakeKind;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub kind: MistakeKind,
}

#[derive(Debug, Error)]
pub enum SuppressionError {
    #[error("{file}:{line}: malformed suppression entry: {reason}")]
    Malformed { file: String, line: usize, reason: String },
}

/// One parsed, non-comment, non-blank line of a suppression or inclusion
/// file.
#[derive(Debug, Clone)]
struct Entry {
    tag: Tag,
}

fn parse_kind(s: &str) -> Option<MistakeKind> {
    match s {
        "indent" => Some(MistakeKind::Indent),
        "sequence" => Some(MistakeKind::Sequence),
        _ => None,
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parse one line of the format `<file> <line>:<col> <kind> <optional-message>`.
/// `source_name` and `source_line` are only used to build the error message.
fn parse_line(line: &str, source_name: &str, source_line: usize) -> Result<Option<Entry>, SuppressionError> {
    let stripped = strip_comment(line).trim();
    if stripped.is_empty() {
        return Ok(None);
    }
    let malformed = |reason: &str| SuppressionError::Malformed {
        file: source_name.to_string(),
        line: source_line,
        reason: reason.to_string(),
    };

    let mut parts = stripped.splitn(3, char::is_whitespace);
    let file = parts.next().ok_or_else(|| malformed("missing file"))?;
    let rest = parts.next().ok_or_else(|| malformed("missing line:col"))?;
    let kind_and_message = parts.next().unwrap_or("").trim();
    let kind_str = kind_and_message.split_whitespace().next().unwrap_or("");

    let (line_str, col_str) = rest.split_once(':').ok_or_else(|| malformed("expected line:col"))?;
    let line_no: u32 = line_str.trim().parse().map_err(|_| malformed("line is not a number"))?;
    let col_no: u32 = col_str.trim().parse().map_err(|_| malformed("column is not a number"))?;
    let kind = parse_kind(kind_str).ok_or_else(|| malformed("unknown kind"))?;

    Ok(Some(Entry {
        tag: Tag {
            file: file.to_string(),
            line: line_no,
            column: col_no,
            kind,
        },
    }))
}

fn parse_entries(text: &str, source_name: &str) -> Result<Vec<Entry>, SuppressionError> {
    let mut entries = Vec::new();
    for (i, raw_line) in text.lines().enumerate() {
        if let Some(entry) = parse_line(raw_line, source_name, i + 1)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Drops diagnostics matching a suppression tag, or restricts them to an
/// inclusion list, tracking which suppression tags were actually matched.
#[derive(Debug, Default)]
pub struct Filter {
    suppressions: HashSet<Tag>,
    used: HashSet<Tag>,
    inclusions: Option<HashSet<Tag>>,
}

impl Filter {
    pub fn new() -> Self {
        Filter::default()
    }

    pub fn load_suppressions(&mut self, text: &str, source_name: &str) -> Result<(), SuppressionError> {
        for entry in parse_entries(text, source_name)? {
            self.suppressions.insert(entry.tag);
        }
        Ok(())
    }

    pub fn load_inclusions(&mut self, text: &str, source_name: &str) -> Result<(), SuppressionError> {
        let set = self.inclusions.get_or_insert_with(HashSet::new);
        for entry in parse_entries(text, source_name)? {
            set.insert(entry.tag);
        }
        Ok(())
    }

    /// Whether `tag` should be emitted: `None` means drop silently, `Some(true)`
    /// means emit as-is, `Some(false)` means emit but rewritten with the
    /// `SUPPRESSION` prefix (only reachable when `census_whitespace` is set
    /// by the caller).
    pub fn admit(&mut self, tag: &Tag, census_whitespace: bool) -> Admission {
        if let Some(inclusions) = &self.inclusions {
            if !inclusions.contains(tag) {
                return Admission::Drop;
            }
        }
        if self.suppressions.contains(tag) {
            self.used.insert(tag.clone());
            return if census_whitespace {
                Admission::EmitSuppressed
            } else {
                Admission::Drop
            };
        }
        Admission::Emit
    }

    /// Suppression tags that never matched a reported diagnostic.
    pub fn unused_suppressions(&self) -> impl Iterator<Item = &Tag> {
        self.suppressions.difference(&self.used)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Emit,
    EmitSuppressed,
    Drop,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(line: u32, column: u32) -> Tag {
        Tag {
            file: "file".into(),
            line,
            column,
            kind: MistakeKind::Indent,
        }
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let entries = parse_entries("\n# a comment\n   \n", "suppressions").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn well_formed_line_parses() {
        let entries = parse_entries("file 3:5 indent stray message", "suppressions").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag, tag(3, 5));
    }

    #[test]
    fn malformed_line_fails_fast_naming_the_line() {
        let err = parse_entries("file 3:5 indent ok\nfile garbage sequence", "suppressions").unwrap_err();
        match err {
            SuppressionError::Malformed { line, .. } => assert_eq!(line, 2),
        }
    }

    #[test]
    fn suppressed_tag_is_dropped_and_marked_used() {
        let mut filter = Filter::new();
        filter.load_suppressions("file 3:5 indent", "suppressions").unwrap();
        let t = tag(3, 5);
        assert_eq!(filter.admit(&t, false), Admission::Drop);
        assert_eq!(filter.unused_suppressions().count(), 0);
    }

    #[test]
    fn unmatched_suppression_stays_unused() {
        let mut filter = Filter::new();
        filter.load_suppressions("file 3:5 indent", "suppressions").unwrap();
        let other = tag(4, 5);
        assert_eq!(filter.admit(&other, false), Admission::Emit);
        assert_eq!(filter.unused_suppressions().count(), 1);
    }

    #[test]
    fn census_whitespace_emits_suppressed_with_marker() {
        let mut filter = Filter::new();
        filter.load_suppressions("file 3:5 indent", "suppressions").unwrap();
        let t = tag(3, 5);
        assert_eq!(filter.admit(&t, true), Admission::EmitSuppressed);
    }

    #[test]
    fn inclusion_list_restricts_to_listed_tags() {
        let mut filter = Filter::new();
        filter.load_inclusions("file 3:5 indent", "inclusions").unwrap();
        assert_eq!(filter.admit(&tag(3, 5), false), Admission::Emit);
        assert_eq!(filter.admit(&tag(9, 9), false), Admission::Drop);
    }
}
