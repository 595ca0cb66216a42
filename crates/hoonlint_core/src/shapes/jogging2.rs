//! 2-jogging: a jogging hoon with a head and subhead and no
//! tail. Six gap-indents; the first two children are checked against the
//! rune column directly, the jogging's own jogs via [`crate::shapes::jog`].

use crate::context::ChessSide;
use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};
use crate::shapes::check_closing_tistis;

pub fn check(
    rune: GapIndent,
    first_child: GapIndent,
    second_child: GapIndent,
    closing: GapIndent,
    side: ChessSide,
    closing_literal: &str,
) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    let expected_first = match side {
        ChessSide::Kingside => rune.column + 6,
        ChessSide::Queenside => rune.column + 8,
    };
    if first_child.line != rune.line {
        mistakes.push(Mistake::indent(
            "2-jogging first child not on rune line.",
            first_child.line,
            first_child.column,
            1,
            MistakeDetail::ExpectedLine(rune.line),
        ));
    } else if first_child.column != expected_first {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("2-jogging first child", first_child.column, expected_first),
            first_child.line,
            first_child.column,
            1,
            MistakeDetail::ExpectedColumn(expected_first),
        ));
    }

    let expected_second = match side {
        ChessSide::Kingside => rune.column + 4,
        ChessSide::Queenside => rune.column + 6,
    };
    if second_child.line != rune.line && second_child.column != expected_second {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("2-jogging second child", second_child.column, expected_second),
            second_child.line,
            second_child.column,
            2,
            MistakeDetail::ExpectedColumn(expected_second),
        ));
    }

    mistakes.extend(check_closing_tistis(closing, rune.line, rune.column, closing_literal));
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
    fn kingside_children_at_expected_columns_are_clean() {
        let mistakes = check(gi(1, 0), gi(1, 6), gi(1, 4), gi(4, 0), ChessSide::Kingside, "==");
        assert!(mistakes.is_empty());
    }

    #[test]
    fn second_child_on_own_line_at_expected_column_is_clean() {
        let mistakes = check(gi(1, 0), gi(1, 6), gi(2, 4), gi(4, 0), ChessSide::Kingside, "==");
        assert!(mistakes.is_empty());
    }

    #[test]
    fn first_child_misaligned_is_flagged() {
        let mistakes = check(gi(1, 0), gi(1, 5), gi(2, 4), gi(4, 0), ChessSide::Kingside, "==");
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].column, 5);
    }
}
