//! Mistake Reporter: converts mistake records into recorded diagnostic
//! lines, applying suppression/inclusion, and accumulates them keyed by
//! source line for the windowed renderer.

use std::collections::{BTreeMap, BTreeSet};

use hoonlint_errors::{Diagnostic, Span};
use hoonlint_syntax::SourceBuffer;

use crate::mistake::Mistake;
use crate::suppress::{Admission, Filter, Tag};

/// Process-wide accumulator for one run. Initialized before the walk,
/// finalized after, drained by the renderer. Every recorded mistake is
/// also kept as a [`Diagnostic`], the vocabulary a future integration
/// (an LSP, a machine-readable `--json` mode) would consume instead of
/// the preformatted text lines.
#[derive(Debug, Default)]
pub struct Report {
    pub topic_lines: BTreeSet<u32>,
    pub mistake_lines: BTreeMap<u32, Vec<String>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    /// Record one mistake, consulting `filter` for suppression/inclusion.
    /// `parent_line` is the enclosing node's line, added to `topic_lines`
    /// alongside the mistake's own line so the renderer can show the
    /// construct the mistake occurred inside of.
    pub fn record(
        &mut self,
        file: &str,
        hoon_name: &str,
        parent_line: u32,
        mistake: &Mistake,
        buf: &SourceBuffer,
        filter: &mut Filter,
        census_whitespace: bool,
    ) {
        let tag = Tag {
            file: file.to_string(),
            line: mistake.line,
            column: mistake.column + 1,
            kind: mistake.kind,
        };

        match filter.admit(&tag, census_whitespace) {
            Admission::Drop => {}
            Admission::Emit => self.push(file, hoon_name, parent_line, mistake, buf, &mistake.description),
            Admission::EmitSuppressed => {
                let rewritten = format!("SUPPRESSION {}", mistake.description);
                self.push(file, hoon_name, parent_line, mistake, buf, &rewritten);
            }
        }
    }

    fn push(&mut self, file: &str, hoon_name: &str, parent_line: u32, mistake: &Mistake, buf: &SourceBuffer, description: &str) {
        let offset = buf.index().line_start(mistake.line) as u32 + mistake.column;
        let diagnostic =
            Diagnostic::warning(0, mistake.kind.as_str(), description.to_string()).primary(Span::new(offset, offset + 1), hoon_name.to_string());

        let line_text = format!(
            "{} {}:{} {} {} {}",
            file,
            mistake.line,
            mistake.column + 1,
            diagnostic.code,
            hoon_name,
            diagnostic.message
        );
        self.mistake_lines.entry(mistake.line).or_default().push(line_text);
        self.topic_lines.insert(parent_line);
        self.topic_lines.insert(mistake.line);
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mistake::{Mistake, MistakeDetail};

    #[test]
    fn emitted_mistake_records_both_lines() {
        let buf = SourceBuffer::new("a\nb\nc\nd\ne\n");
        let mut report = Report::new();
        let mut filter = Filter::new();
        let mistake = Mistake::indent("underindented", 5, 3, 1, MistakeDetail::ExpectedColumn(4));
        report.record("f.hoon", "wutHep", 4, &mistake, &buf, &mut filter, false);
        assert!(report.topic_lines.contains(&4));
        assert!(report.topic_lines.contains(&5));
        assert_eq!(report.mistake_lines[&5].len(), 1);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn suppressed_mistake_is_dropped() {
        let buf = SourceBuffer::new("a\nb\nc\nd\ne\n");
        let mut report = Report::new();
        let mut filter = Filter::new();
        filter.load_suppressions("f.hoon 6:4 indent", "suppressions").unwrap();
        let mistake = Mistake::indent("underindented", 5, 3, 1, MistakeDetail::ExpectedColumn(4));
        report.record("f.hoon", "wutHep", 4, &mistake, &buf, &mut filter, false);
        assert!(report.mistake_lines.is_empty());
        assert!(report.diagnostics.is_empty());
    }
}
