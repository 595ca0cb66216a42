//! Symbol/Rule Catalog: the constructed-once, shared-by-reference value
//! that ties the symbol table, rule table, and rule classifier together.
//! It is built once from the grammar and is effectively immutable
//! afterwards -- callers pass `&Catalog` down the walk rather than
//! reaching for process-global state.

use crate::classify::{Classifier, EnumeratedSets, ShapeClass};
use crate::rule::{RuleId, RuleMeta, RuleTable};
use crate::symbol::{SymbolId, SymbolMeta, SymbolTable};
use hashbrown::HashSet;

pub struct Catalog {
    pub symbols: SymbolTable,
    pub rules: RuleTable,
    classifier: Classifier,
    mortar_lhs: HashSet<SymbolId>,
}

impl Catalog {
    /// Build a catalog from a fully populated symbol table, rule table, and
    /// the grammar's enumerated shape sets. A real integration calls the
    /// external parser's own symbol/rule enumeration to populate
    /// `symbols`/`rules` before calling this.
    pub fn build(symbols: SymbolTable, rules: RuleTable, sets: &EnumeratedSets) -> Self {
        let classifier = Classifier::build(
            rules.iter().map(|r| (r.id, symbols.get(r.lhs).name.as_str())),
            sets,
        );
        let mortar_lhs = sets
            .mortar_lhs
            .iter()
            .filter_map(|name| symbols.by_name(name))
            .collect();
        Catalog {
            symbols,
            rules,
            classifier,
            mortar_lhs,
        }
    }

    pub fn symbol(&self, id: SymbolId) -> &SymbolMeta {
        self.symbols.get(id)
    }

    pub fn rule(&self, id: RuleId) -> &RuleMeta {
        self.rules.get(id)
    }

    pub fn shape_of(&self, rule: RuleId) -> ShapeClass {
        self.classifier.shape_of(rule)
    }

    /// Whether a rule's LHS is "mortar" (structural glue) and should be
    /// suppressed as the diagnostic name of a construct in favor of the
    /// nearest non-mortar ancestor.
    pub fn is_mortar(&self, lhs: SymbolId) -> bool {
        self.mortar_lhs.contains(&lhs)
    }

    pub fn lhs_name(&self, rule: RuleId) -> &str {
        &self.symbol(self.rule(rule).lhs).name
    }
}
