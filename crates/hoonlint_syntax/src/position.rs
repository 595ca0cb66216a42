//! Position Index: a one-shot scan of a source buffer that turns any
//! byte offset into a 1-based line and 0-based column.

use hoonlint_errors::file::line_starts;

/// Offset of line N is `line_to_pos[N - 1]`. Built once per source buffer;
/// every subsequent `line_column` query is a binary search.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    line_to_pos: Vec<usize>,
}

impl PositionIndex {
    pub fn new(source: &str) -> Self {
        PositionIndex {
            line_to_pos: line_starts(source).collect(),
        }
    }

    /// 1-based line, 0-based column for a byte offset into the source this
    /// index was built from.
    pub fn line_column(&self, offset: usize) -> (u32, u32) {
        let line0 = match self.line_to_pos.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let col = offset - self.line_to_pos[line0];
        (line0 as u32 + 1, col as u32)
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start(&self, line: u32) -> usize {
        self.line_to_pos[(line - 1) as usize]
    }

    pub fn line_count(&self) -> usize {
        self.line_to_pos.len()
    }
}

/// A source buffer paired with its position index, handed to the tree
/// walker so shape checkers can recover `(line, col)` for any span and
/// slice out literal text (used by the closing-`==` sanity check in the
/// jogging checkers).
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    text: String,
    index: PositionIndex,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = PositionIndex::new(&text);
        SourceBuffer { text, index }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    pub fn line_column(&self, offset: usize) -> (u32, u32) {
        self.index.line_column(offset)
    }

    /// The literal bytes at `[offset, offset + length)`. Used by the
    /// jogging closing-token checks to confirm a reported `==` position
    /// actually contains `==` before flagging it.
    pub fn literal(&self, offset: usize, length: usize) -> &str {
        &self.text[offset..offset + length]
    }
}
