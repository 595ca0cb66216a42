//! Prefix-jogging / jogging-1: a jogging hoon with a tail and no head.
//! Only the kingside case appears in the corpus; the queenside tail
//! column is an open question left unimplemented rather than guessed.

use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};

/// The closing `==` sits two stops past the rune (not flush with it, as
/// in the other jogging shapes), and the tail child is flush with the
/// rune column.
pub fn check(rune: GapIndent, tail: GapIndent, closing: GapIndent, closing_literal: &str) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    if tail.column != rune.column {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("prefix-jogging tail", tail.column, rune.column),
            tail.line,
            tail.column,
            1,
            MistakeDetail::ExpectedColumn(rune.column),
        ));
    }

    let expected_closing = rune.column + 2;
    if closing.line == rune.line {
        mistakes.push(Mistake::indent(
            "TISTIS on rune line; should not be.",
            closing.line,
            closing.column,
            2,
            MistakeDetail::None,
        ));
    } else if closing_literal == "==" && closing.column != expected_closing {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("TISTIS", closing.column, expected_closing),
            closing.line,
            closing.column,
            2,
            MistakeDetail::ExpectedColumn(expected_closing),
        ));
    }

    mistakes
}
