//! The CST data model, Position Index, and Symbol/Rule Catalog consumed by
//! the hoonlint core.
//!
//! This crate deliberately does not contain a grammar or a parser: the
//! grammar and parser producing the CST are an external collaborator,
//! consuming an already-built tree. What lives here is the tree *shape*
//! itself (arena-allocated nodes with index back-references, see
//! [`tree`]), the Position Index ([`position`]), and the catalog the
//! linter classifies rules against ([`catalog`], [`classify`], [`symbol`],
//! [`rule`]) -- the data a real parser integration must hand the linter.

pub mod catalog;
pub mod classify;
pub mod position;
pub mod rule;
pub mod symbol;
pub mod tree;

pub use catalog::Catalog;
pub use classify::{Classifier, EnumeratedSets, ShapeClass};
pub use hoonlint_errors::Span;
pub use position::{PositionIndex, SourceBuffer};
pub use rule::{RuleId, RuleMeta, RuleTable};
pub use symbol::{SymbolId, SymbolMeta, SymbolTable};
pub use tree::{CstNode, NodeIndex, NodeKind, Tree, TreeBuilder};
