//! Jog shape: a single `head gap body` pair inside a jogging.
//! `chess_side`, `rune_column` and `jog_body_column` are supplied by the
//! enclosing jogging's census and are consumed entirely by this checker --
//! the walker clears them before descending into the jog's own children.

use crate::context::ChessSide;
use crate::jogging::JogGeometry;
use crate::mistake::{describe_column_mismatch, Mistake, MistakeDetail};

const MINIMAL_GAP: u32 = 2;

pub fn check(geometry: &JogGeometry, side: ChessSide, rune_column: u32, jog_body_column: u32) -> Vec<Mistake> {
    let mut mistakes = Vec::new();

    let expected_head = match side {
        ChessSide::Kingside => rune_column + 2,
        ChessSide::Queenside => rune_column + 4,
    };
    if geometry.head_column != expected_head {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("jog head", geometry.head_column, expected_head),
            geometry.head_line,
            geometry.head_column,
            0,
            MistakeDetail::ExpectedColumn(expected_head),
        ));
    }

    if geometry.is_split() {
        let expected_body = match side {
            ChessSide::Kingside => rune_column + 4,
            ChessSide::Queenside => rune_column + 2,
        };
        if geometry.body_column != expected_body {
            mistakes.push(Mistake::indent(
                describe_column_mismatch("jog body", geometry.body_column, expected_body),
                geometry.body_line,
                geometry.body_column,
                1,
                MistakeDetail::ExpectedColumn(expected_body),
            ));
        }
    } else if geometry.gap_len != MINIMAL_GAP && geometry.body_column != jog_body_column {
        mistakes.push(Mistake::indent(
            describe_column_mismatch("jog body", geometry.body_column, jog_body_column),
            geometry.body_line,
            geometry.body_column,
            1,
            MistakeDetail::ExpectedColumn(jog_body_column),
        ));
    }

    mistakes
}
