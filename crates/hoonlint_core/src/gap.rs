//! Gap-Indent Extraction: the positions where a line break may
//! occur in a node's tall form, and therefore the only positions
//! indentation rules constrain.

use hoonlint_syntax::tree::{NodeIndex, NodeKind};
use hoonlint_syntax::{Catalog, SourceBuffer, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapIndent {
    pub node: NodeIndex,
    pub line: u32,
    pub column: u32,
}

fn symbol_of(tree: &Tree, node: NodeIndex) -> Option<hoonlint_syntax::SymbolId> {
    match tree.node(node).kind {
        NodeKind::Lexeme { symbol } | NodeKind::Separator { symbol } | NodeKind::Null { symbol } => Some(symbol),
        NodeKind::Node { .. } => None,
    }
}

fn is_gap_child(tree: &Tree, catalog: &Catalog, node: NodeIndex) -> bool {
    symbol_of(tree, node).map(|s| catalog.symbol(s).is_gap).unwrap_or(false)
}

fn position_of(buf: &SourceBuffer, tree: &Tree, node: NodeIndex) -> GapIndent {
    let (line, column) = buf.line_column(tree.node(node).start as usize);
    GapIndent { node, line, column }
}

/// The list `[(line, col)]` consisting of the first child, plus, for every
/// child whose symbol is a gap, the immediately following child.
pub fn gap_indents(tree: &Tree, catalog: &Catalog, buf: &SourceBuffer, node: NodeIndex) -> Vec<GapIndent> {
    let children: Vec<NodeIndex> = tree.children(node).collect();
    let mut out = Vec::new();
    if children.is_empty() {
        return out;
    }
    out.push(position_of(buf, tree, children[0]));
    for (i, &child) in children.iter().enumerate() {
        if is_gap_child(tree, catalog, child) {
            if let Some(&next) = children.get(i + 1) {
                out.push(position_of(buf, tree, next));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoonlint_syntax::{EnumeratedSets, RuleId, RuleTable, SymbolId, SymbolTable, Tree};

    fn buf() -> SourceBuffer {
        SourceBuffer::new("a  b  c\n")
    }

    fn build_catalog() -> (Catalog, SymbolId, SymbolId) {
        let mut symbols = SymbolTable::new();
        let gap = symbols.insert("GAP", true);
        let item = symbols.insert("item", false);
        let lhs = symbols.insert("seqRule", false);
        let mut rules = RuleTable::new();
        rules.insert(lhs, vec![item, gap, item, gap, item], None, &symbols);
        let sets = EnumeratedSets::default();
        (Catalog::build(symbols, rules, &sets), gap, item)
    }

    #[test]
    fn extraction_includes_first_child_and_post_gap_children() {
        let (catalog, gap, item) = build_catalog();

        // a <gap> b <gap> c
        let mut b = Tree::builder();
        b.start_node(RuleId(0));
        b.lexeme(item, 0, 1); // "a"
        b.separator(gap, 1, 2); // "  "
        b.lexeme(item, 3, 1); // "b"
        b.separator(gap, 4, 2); // "  "
        b.lexeme(item, 6, 1); // "c"
        b.finish_node();
        let tree = b.finish();
        let src = buf();

        let indents = gap_indents(&tree, &catalog, &src, tree.root());
        let cols: Vec<u32> = indents.iter().map(|g| g.column).collect();
        assert_eq!(cols, vec![0, 3, 6]);
    }

    #[test]
    fn extraction_is_monotone_in_line_then_column() {
        let (catalog, gap, item) = build_catalog();
        let src = SourceBuffer::new("a\n  b\n  c\n");
        let mut b = Tree::builder();
        b.start_node(RuleId(0));
        b.lexeme(item, 0, 1);
        b.separator(gap, 1, 3);
        b.lexeme(item, 4, 1);
        b.separator(gap, 5, 3);
        b.lexeme(item, 8, 1);
        b.finish_node();
        let tree = b.finish();

        let indents = gap_indents(&tree, &catalog, &src, tree.root());
        for w in indents.windows(2) {
            assert!(w[0].line <= w[1].line);
            if w[0].line == w[1].line {
                assert!(w[0].column < w[1].column);
            }
        }
    }
}
