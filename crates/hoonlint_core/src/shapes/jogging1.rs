//! 1-jogging: a jogging hoon with one head and no tail, e.g.
//! `?-`. The enclosing jogging census (run by the walker before
//! descending) supplies `chess_side` for the head-column check; the
//! jogs themselves are checked independently via [`crate::shapes::jog`].

use crate::context::ChessSide;
use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};
use crate::shapes::check_closing_tistis;

pub fn check(rune: GapIndent, head: GapIndent, closing: GapIndent, side: ChessSide, closing_literal: &str) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    let expected_head = match side {
        ChessSide::Kingside => rune.column + 4,
        ChessSide::Queenside => rune.column + 6,
    };
    if head.line != rune.line {
        mistakes.push(Mistake::indent(
            "1-jogging head not on rune line.",
            head.line,
            head.column,
            1,
            MistakeDetail::ExpectedLine(rune.line),
        ));
    } else if head.column != expected_head {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("1-jogging head", head.column, expected_head),
            head.line,
            head.column,
            1,
            MistakeDetail::ExpectedColumn(expected_head),
        ));
    }

    mistakes.extend(check_closing_tistis(closing, rune.line, rune.column, closing_literal));
    mistakes
}
