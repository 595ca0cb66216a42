//! Jogging Census: infers a jogging's chess-sidedness and its
//! aligned jog-body column from the jogs it contains, before the walker
//! descends into them.

use crate::context::ChessSide;

/// The geometry of a single jog, as measured from the tree: head start,
/// body start, whether head and body share a line, and -- when they do --
/// the column width of the whitespace between head and body.
#[derive(Debug, Clone, Copy)]
pub struct JogGeometry {
    pub head_line: u32,
    pub head_column: u32,
    pub body_line: u32,
    pub body_column: u32,
    pub gap_len: u32,
}

impl JogGeometry {
    pub fn is_split(&self) -> bool {
        self.head_line != self.body_line
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JoggingCensus {
    pub side: ChessSide,
    pub body_column: u32,
}

/// Run the census over every jog in a jogging.
///
/// Sidedness: a jog is queenside if `head_column - rune_column >= 4`,
/// kingside otherwise. The jogging as a whole is kingside only if strictly
/// more jogs are kingside than queenside -- so a tie resolves to
/// queenside, matching the current documented, not-yet-revised behavior.
///
/// Body column: among jogs whose head/body gap is wider than the minimal
/// 2-column separator (an "alignment attempt"), the column with the most
/// occurrences wins; ties go to whichever body column's first occurrence
/// came first. Falls back to the first jog's body column when no jog is
/// aligned.
pub fn census(rune_column: u32, jogs: &[JogGeometry]) -> JoggingCensus {
    let mut kingside = 0u32;
    let mut queenside = 0u32;
    for jog in jogs {
        if jog.head_column.saturating_sub(rune_column) >= 4 {
            queenside += 1;
        } else {
            kingside += 1;
        }
    }
    let side = if kingside > queenside {
        ChessSide::Kingside
    } else {
        ChessSide::Queenside
    };

    let body_column = aligned_body_column(jogs).unwrap_or_else(|| {
        jogs.first().map(|j| j.body_column).unwrap_or(rune_column)
    });

    JoggingCensus { side, body_column }
}

const MINIMAL_GAP: u32 = 2;

fn aligned_body_column(jogs: &[JogGeometry]) -> Option<u32> {
    // (column, occurrences, first_line), kept in first-seen order so the
    // comparison below is deterministic.
    let mut counts: Vec<(u32, u32, u32)> = Vec::new();
    for jog in jogs {
        if jog.is_split() || jog.gap_len <= MINIMAL_GAP {
            continue;
        }
        if let Some(entry) = counts.iter_mut().find(|(col, _, _)| *col == jog.body_column) {
            entry.1 += 1;
        } else {
            counts.push((jog.body_column, 1, jog.body_line));
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(u32, u32, u32)>, candidate| match best {
            None => Some(candidate),
            Some(best) => {
                let (_, bcount, bline) = best;
                let (_, ccount, cline) = candidate;
                if ccount > bcount || (ccount == bcount && cline < bline) {
                    Some(candidate)
                } else {
                    Some(best)
                }
            }
        })
        .map(|(col, _, _)| col)
}
