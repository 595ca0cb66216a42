//! 0-jogging: a jogging hoon with no head and no tail, e.g.
//! `?|`. Four gap-indents: rune, first child, jogging, closing `==`.

use crate::gap::GapIndent;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};
use crate::shapes::check_closing_tistis;

pub fn check(rune: GapIndent, first_child: GapIndent, closing: GapIndent, closing_literal: &str) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    let expected_first = rune.column + 2;
    if first_child.line != rune.line && first_child.column != expected_first {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("0-jogging first child", first_child.column, expected_first),
            first_child.line,
            first_child.column,
            1,
            MistakeDetail::ExpectedColumn(expected_first),
        ));
    }

    mistakes.extend(check_closing_tistis(closing, rune.line, rune.column, closing_literal));
    mistakes
}
