//! Backdented shape: the implicit catch-all descending staircase, where
//! each successive gap-indent sits one stop left of the previous.

use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};

/// `gap_indents` has `N + 1` entries; the expected column for index `i`
/// (`i >= 1`) is `base_col + 2 * (N - i + 1)`, unless the child shares a
/// line with its predecessor, in which case no column constraint applies.
pub fn check(gap_indents: &[GapIndent]) -> Vec<Mistake> {
    check_against_base(gap_indents, gap_indents.first().map(|g| g.column).unwrap_or(0))
}

/// Shared by the cast checker, which runs the identical staircase formula
/// but anchors it at `note_indent` instead of the node's own first child
/// column.
pub fn check_against_base(gap_indents: &[GapIndent], base_col: u32) -> Vec<Mistake> {
    if gap_indents.len() < 2 {
        return Vec::new();
    }
    let n = gap_indents.len() - 1;
    let mut mistakes = Vec::new();
    for i in 1..gap_indents.len() {
        if gap_indents[i].line == gap_indents[i - 1].line {
            continue;
        }
        let expected = base_col + 2 * (n - i + 1) as u32;
        if gap_indents[i].column != expected {
            mistakes.push(Mistake::indent(
                describe_column_mismatch("backdented child", gap_indents[i].column, expected),
                gap_indents[i].line,
                gap_indents[i].column,
                i,
                MistakeDetail::BackdentColumn(expected),
            ));
        }
    }
    mistakes
}
