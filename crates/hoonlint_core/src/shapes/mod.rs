//! Shape Checkers: one module per whitespace shape. The tree walker
//! dispatches to these by the precomputed `rule_id -> ShapeClass` lookup
//! rather than re-testing LHS names.

pub mod backdented;
pub mod cast;
pub mod jog;
pub mod jogging0;
pub mod jogging1;
pub mod jogging2;
pub mod jogging_prefix;
pub mod luslus;
pub mod sequence;

use crate::gap::GapIndent;
use crate::mistake::{Mistake, MistakeDetail};

/// The closing `==` check duplicated across the four jogging variants:
/// the terminator must not share the rune's line, must sit at
/// `expected_column`, and -- because parser terminator recovery can
/// synthesize a `==` token at a recovery position -- misalignment is only
/// reported when the source literal at that position genuinely reads
/// `==`.
pub fn check_closing_tistis(
    closing: GapIndent,
    rune_line: u32,
    expected_column: u32,
    literal: &str,
) -> Vec<Mistake> {
    let mut mistakes = Vec::new();
    if closing.line == rune_line {
        mistakes.push(Mistake::indent(
            "TISTIS on rune line; should not be.",
            closing.line,
            closing.column,
            0,
            MistakeDetail::None,
        ));
        return mistakes;
    }
    if literal != "==" {
        return mistakes;
    }
    if closing.column != expected_column {
        mistakes.push(Mistake::indent(
            crate::mistake::describe_column_mismatch("TISTIS", closing.column, expected_column),
            closing.line,
            closing.column,
            0,
            MistakeDetail::ExpectedColumn(expected_column),
        ));
    }
    mistakes
}
