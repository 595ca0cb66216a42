//! Windowed diagnostic renderer: groups a [`Report`]'s topic lines into
//! contiguous blocks within a configurable context window, prints the
//! source lines around each block with a divider between non-adjacent
//! blocks, and the mistake lines themselves colored so they stand out in
//! a terminal.

use colored::Colorize;
use hoonlint_core::Report;
use hoonlint_syntax::SourceBuffer;

/// One block of topic lines no two of which are more than `2*(context-1)`
/// apart, so their rendered windows overlap or touch.
fn blocks(topic_lines: &[u32], context: usize) -> Vec<(u32, u32)> {
    let span = context.max(1) as u32 - 1;
    let mut out = Vec::new();
    let mut iter = topic_lines.iter().copied();
    let Some(first) = iter.next() else { return out };
    let mut lo = first.saturating_sub(span);
    let mut hi = first + span;
    for line in iter {
        let window_lo = line.saturating_sub(span);
        if window_lo <= hi + 1 {
            hi = line + span;
        } else {
            out.push((lo, hi));
            lo = window_lo;
            hi = line + span;
        }
    }
    out.push((lo, hi));
    out
}

fn line_text(buf: &SourceBuffer, line: u32) -> &str {
    let index = buf.index();
    let start = index.line_start(line);
    let text = buf.text();
    if (line as usize) < index.line_count() {
        let end = index.line_start(line + 1);
        text[start..end].trim_end_matches(['\n', '\r'])
    } else {
        text[start..].trim_end_matches(['\n', '\r'])
    }
}

/// Render `report` to `out`, one windowed block per group of nearby topic
/// lines, a `--` divider between non-adjacent blocks, and every recorded
/// mistake line printed directly after the source line it belongs to.
pub fn render(out: &mut dyn std::io::Write, report: &Report, buf: &SourceBuffer, context: usize) -> std::io::Result<()> {
    let topic_lines: Vec<u32> = report.topic_lines.iter().copied().collect();
    let groups = blocks(&topic_lines, context);
    let last_line = buf.index().line_count() as u32;

    for (i, &(lo, hi)) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(out, "--")?;
        }
        let lo = lo.max(1);
        let hi = hi.min(last_line);
        for line in lo..=hi {
            let is_topic = report.topic_lines.contains(&line);
            let has_mistake = report.mistake_lines.contains_key(&line);
            let prefix = if has_mistake { "!" } else if is_topic { ">" } else { " " };
            writeln!(out, "{} {:>5} {}", prefix, line, line_text(buf, line))?;
            if let Some(mistakes) = report.mistake_lines.get(&line) {
                for entry in mistakes {
                    writeln!(out, "{}", entry.red())?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_topic_lines_form_one_block() {
        assert_eq!(blocks(&[3, 4], 2), vec![(2, 5)]);
    }

    #[test]
    fn distant_topic_lines_form_two_blocks() {
        assert_eq!(blocks(&[1, 50], 2), vec![(0, 2), (49, 51)]);
    }

    #[test]
    fn empty_topic_lines_yield_no_blocks() {
        assert!(blocks(&[], 2).is_empty());
    }
}
