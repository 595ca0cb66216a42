//! Lint context: threaded by value down the walk -- no mutable shared
//! state, each recursive call gets its own derived copy, and a jogging's
//! consumed fields are cleared only on the copy handed to *its own* jog
//! children.

use hoonlint_syntax::RuleId;
use std::rc::Rc;

const MAX_ANCESTORS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessSide {
    Kingside,
    Queenside,
}

#[derive(Debug, Clone)]
pub struct LintContext {
    /// Line of the parent node, used to decide whether a child starts a
    /// fresh line.
    pub line: u32,
    /// Columns seen on the current line.
    pub indent_stack: Vec<u32>,
    /// The 5 most recent `(rule_id, start)` ancestors, oldest first.
    pub ancestors: Vec<(RuleId, u32)>,
    pub body_indent: Option<u32>,
    pub tall_rune_indent: Option<u32>,
    pub note_indent: Option<u32>,
    pub chess_side: Option<ChessSide>,
    pub jog_rune_column: Option<u32>,
    pub jog_body_column: Option<u32>,
    /// Nearest enclosing non-mortar LHS name, used in diagnostics instead
    /// of a glue-symbol name.
    pub hoon_name: Option<Rc<str>>,
}

impl Default for LintContext {
    fn default() -> Self {
        LintContext {
            line: 1,
            indent_stack: Vec::new(),
            ancestors: Vec::new(),
            body_indent: None,
            tall_rune_indent: None,
            note_indent: None,
            chess_side: None,
            jog_rune_column: None,
            jog_body_column: None,
            hoon_name: None,
        }
    }
}

impl LintContext {
    pub fn root() -> Self {
        LintContext::default()
    }

    /// Append an ancestor, bounding the chain to the 5 most recent entries.
    pub fn with_ancestor(&self, rule_id: RuleId, start: u32) -> Self {
        let mut ancestors = self.ancestors.clone();
        ancestors.push((rule_id, start));
        if ancestors.len() > MAX_ANCESTORS {
            let excess = ancestors.len() - MAX_ANCESTORS;
            ancestors.drain(0..excess);
        }
        LintContext {
            ancestors,
            ..self.clone()
        }
    }

    pub fn with_body_indent(&self, column: u32) -> Self {
        LintContext {
            body_indent: Some(column),
            ..self.clone()
        }
    }

    pub fn with_tall_rune_indent(&self, column: u32) -> Self {
        LintContext {
            tall_rune_indent: Some(column),
            ..self.clone()
        }
    }

    pub fn with_hoon_name(&self, name: Rc<str>) -> Self {
        LintContext {
            hoon_name: Some(name),
            ..self.clone()
        }
    }

    /// Populate the jogging-specific fields; consumed by the jogging's
    /// immediate jog children and cleared on the copy passed to *their*
    /// children by [`LintContext::without_jog_fields`].
    pub fn with_jogging(&self, side: ChessSide, rune_column: u32, body_column: u32) -> Self {
        LintContext {
            chess_side: Some(side),
            jog_rune_column: Some(rune_column),
            jog_body_column: Some(body_column),
            ..self.clone()
        }
    }

    /// Clear the jogging fields a jog just consumed so they don't leak
    /// into grandchildren.
    pub fn without_jog_fields(&self) -> Self {
        LintContext {
            chess_side: None,
            jog_rune_column: None,
            jog_body_column: None,
            ..self.clone()
        }
    }

    /// Innermost note-indent: enclosing body-indent,
    /// else enclosing tall-rune-indent, else `fallback` (the cast node's
    /// own column).
    pub fn note_indent_or(&self, fallback: u32) -> u32 {
        self.body_indent.or(self.tall_rune_indent).unwrap_or(fallback)
    }

    /// Reset or extend the indent stack for a node starting at `line`,
    /// `column`: a fresh line resets the stack, a new column on the same
    /// line is pushed only if it differs from the top.
    pub fn enter_line(&self, line: u32, column: u32) -> Self {
        let mut indent_stack = self.indent_stack.clone();
        if line != self.line {
            indent_stack = vec![column];
        } else if indent_stack.last() != Some(&column) {
            indent_stack.push(column);
        }
        LintContext {
            line,
            indent_stack,
            ..self.clone()
        }
    }
}
