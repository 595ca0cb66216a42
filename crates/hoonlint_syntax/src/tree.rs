//! CST node data model. Nodes are arena-allocated and parent/prev/next
//! back-references are plain indices rather than owning pointers: the
//! arena owns every node, indices merely observe, and there is no cycle
//! for a cycle-detector or a drop glue to worry about.

use crate::rule::RuleId;
use crate::symbol::SymbolId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An interior production application.
    Node { rule_id: RuleId },
    /// A terminal occupying a slice of the source.
    Lexeme { symbol: SymbolId },
    /// A synthetic sibling standing in for the gap between elements of a
    /// sequence rule.
    Separator { symbol: SymbolId },
    /// An empty production.
    Null { symbol: SymbolId },
}

#[derive(Debug, Clone)]
pub struct CstNode {
    pub kind: NodeKind,
    pub start: u32,
    pub length: u32,
    pub children: Vec<NodeIndex>,
    pub parent: Option<NodeIndex>,
    pub prev: Option<NodeIndex>,
    pub next: Option<NodeIndex>,
}

impl CstNode {
    pub fn is_childless(&self) -> bool {
        self.children.is_empty()
    }
}

/// An arena of CST nodes with a designated root. Owns every node; there is
/// no way to construct a `Tree` whose back-references escape the arena.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<CstNode>,
    root: NodeIndex,
}

impl Tree {
    pub fn node(&self, index: NodeIndex) -> &CstNode {
        &self.nodes[index.0 as usize]
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.node(index).children.iter().copied()
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).parent
    }

    pub fn prev_sibling(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).prev
    }

    pub fn next_sibling(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).next
    }

    pub fn builder() -> TreeBuilder {
        TreeBuilder::default()
    }

    /// Depth-first preorder iteration starting at `index`, yielding every
    /// descendant (including `index` itself) in source order.
    pub fn descendants(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut stack = vec![index];
        std::iter::from_fn(move || {
            let current = stack.pop()?;
            let node = self.node(current);
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
            Some(current)
        })
    }
}

/// Incrementally assembles a [`Tree`]. Mirrors the event-sink shape a real
/// parser integration would drive (start a node, push leaves, finish the
/// node), without the parser itself being in scope here: this builder only
/// exists so the core's tests, and any integration shimming an external
/// parser's output into our CST, can build a `Tree` without hand-wiring
/// indices.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<CstNode>,
    open: Vec<NodeIndex>,
}

impl TreeBuilder {
    fn push(&mut self, kind: NodeKind, start: u32, length: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let prev = self.open.last().and_then(|&parent| self.nodes[parent.0 as usize].children.last().copied());
        self.nodes.push(CstNode {
            kind,
            start,
            length,
            children: vec![],
            parent: self.open.last().copied(),
            prev,
            next: None,
        });
        if let Some(prev) = prev {
            self.nodes[prev.0 as usize].next = Some(index);
        }
        if let Some(&parent) = self.open.last() {
            self.nodes[parent.0 as usize].children.push(index);
        }
        index
    }

    /// Open a new interior node; subsequent leaves/nodes become its
    /// children until the matching [`TreeBuilder::finish_node`].
    pub fn start_node(&mut self, rule_id: RuleId) -> NodeIndex {
        let index = self.push(NodeKind::Node { rule_id }, 0, 0);
        self.open.push(index);
        index
    }

    /// Close the innermost open node, deriving its `start`/`length` from
    /// its children (or leaving it zero-length if childless), maintaining
    /// the invariant that a node's span is exactly the union of its
    /// children's spans.
    pub fn finish_node(&mut self) {
        let index = self.open.pop().expect("finish_node with no open node");
        let (start, end) = {
            let node = &self.nodes[index.0 as usize];
            if let (Some(&first), Some(&last)) = (node.children.first(), node.children.last()) {
                let first = &self.nodes[first.0 as usize];
                let last = &self.nodes[last.0 as usize];
                (first.start, last.start + last.length)
            } else {
                (0, 0)
            }
        };
        let node = &mut self.nodes[index.0 as usize];
        node.start = start;
        node.length = end - start;
    }

    pub fn lexeme(&mut self, symbol: SymbolId, start: u32, length: u32) -> NodeIndex {
        self.push(NodeKind::Lexeme { symbol }, start, length)
    }

    pub fn separator(&mut self, symbol: SymbolId, start: u32, length: u32) -> NodeIndex {
        self.push(NodeKind::Separator { symbol }, start, length)
    }

    pub fn null(&mut self, symbol: SymbolId, start: u32) -> NodeIndex {
        self.push(NodeKind::Null { symbol }, start, 0)
    }

    /// Finish building, asserting every opened node was closed. The root is
    /// always the first node pushed: `start_node`/`lexeme`/etc. push the
    /// outermost node before any of its children, so index 0 is the root
    /// regardless of how deep the tree ends up.
    pub fn finish(self) -> Tree {
        assert!(self.open.is_empty(), "unclosed node(s) left open");
        let root = NodeIndex(0);
        Tree {
            nodes: self.nodes,
            root,
        }
    }
}
