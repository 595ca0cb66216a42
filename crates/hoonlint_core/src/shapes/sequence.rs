//! Sequence shape: every non-gap child lines up at a single
//! fixed column -- ordinarily the parent's own column, but `tallSemsig`
//! sequences target two stops past their grandparent instead.

use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};

/// `parent_col` is the sequence node's own column. `semsig_grandparent_col`
/// is `Some(col)` when the grandparent production is `tallSemsig`, in
/// which case the target column is `col + 2` instead of `parent_col`.
pub fn check(gap_indents: &[GapIndent], parent_col: u32, semsig_grandparent_col: Option<u32>) -> Vec<Mistake> {
    if gap_indents.len() < 2 {
        return Vec::new();
    }
    let target = match semsig_grandparent_col {
        Some(grandparent_col) => grandparent_col + 2,
        None => parent_col,
    };
    let mut mistakes = Vec::new();
    for i in 1..gap_indents.len() {
        if gap_indents[i].line == gap_indents[i - 1].line {
            continue;
        }
        if gap_indents[i].column != target {
            mistakes.push(Mistake::sequence(
                describe_column_mismatch("sequence element", gap_indents[i].column, target),
                gap_indents[i].line,
                gap_indents[i].column,
                i,
                MistakeDetail::ExpectedColumn(target),
            ));
        }
    }
    mistakes
}
