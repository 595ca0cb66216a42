//! LusLus alignment: cell-constructor productions where every
//! child after the first sits at a single fixed column, rather than
//! descending like [`crate::shapes::backdented`].

use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};

/// Children on lines after the first all sit at `base_col + 2`, where
/// `base_col` is the column of the first gap-indent. Same-line children
/// are unconstrained.
pub fn check(gap_indents: &[GapIndent]) -> Vec<Mistake> {
    if gap_indents.len() < 2 {
        return Vec::new();
    }
    let base_col = gap_indents[0].column;
    let expected = base_col + 2;
    let mut mistakes = Vec::new();
    for i in 1..gap_indents.len() {
        if gap_indents[i].line == gap_indents[i - 1].line {
            continue;
        }
        if gap_indents[i].column != expected {
            mistakes.push(Mistake::indent(
                describe_column_mismatch("lusLus child", gap_indents[i].column, expected),
                gap_indents[i].line,
                gap_indents[i].column,
                i,
                MistakeDetail::ExpectedColumn(expected),
            ));
        }
    }
    mistakes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gi(line: u32, column: u32) -> GapIndent {
        GapIndent {
            node: hoonlint_syntax::NodeIndex(0),
            line,
            column,
        }
    }

    #[test]
    fn every_child_at_fixed_column_is_clean() {
        let gaps = vec![gi(1, 0), gi(2, 2), gi(3, 2), gi(4, 2)];
        assert!(check(&gaps).is_empty());
    }

    #[test]
    fn same_line_child_is_unconstrained() {
        let gaps = vec![gi(1, 0), gi(1, 10), gi(2, 2)];
        assert!(check(&gaps).is_empty());
    }

    #[test]
    fn drifting_column_is_flagged() {
        let gaps = vec![gi(1, 0), gi(2, 2), gi(3, 4)];
        let mistakes = check(&gaps);
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].column, 4);
        match mistakes[0].detail {
            MistakeDetail::ExpectedColumn(c) => assert_eq!(c, 2),
            _ => panic!("expected ExpectedColumn detail"),
        }
    }
}
