//! Rule half of the Symbol/Rule Catalog.

use crate::symbol::{SymbolId, SymbolTable};
use hashbrown::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub u32);

#[derive(Debug, Clone)]
pub struct RuleMeta {
    pub id: RuleId,
    pub lhs: SymbolId,
    pub rhs: Vec<SymbolId>,
    pub separator: Option<SymbolId>,
    /// -1 for gap-separated sequence rules, else the count of gap-bearing
    /// RHS symbols.
    pub gapiness: i32,
}

#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<RuleMeta>,
    by_lhs: HashMap<SymbolId, Vec<RuleId>>,
}

impl RuleTable {
    pub fn new() -> Self {
        RuleTable::default()
    }

    /// Register a production. `gapiness` is computed here rather than
    /// trusted from the caller: if `separator` is the `GAP` symbol the
    /// rule is a gap-separated sequence (`-1`); otherwise it's the number
    /// of gap-bearing RHS symbols.
    pub fn insert(
        &mut self,
        lhs: SymbolId,
        rhs: Vec<SymbolId>,
        separator: Option<SymbolId>,
        symbols: &SymbolTable,
    ) -> RuleId {
        let id = RuleId(self.rules.len() as u32);
        let gapiness = match separator {
            Some(sep) if symbols.is_gap(sep) => -1,
            _ => rhs.iter().filter(|s| symbols.is_gap(**s)).count() as i32,
        };
        self.rules.push(RuleMeta {
            id,
            lhs,
            rhs,
            separator,
            gapiness,
        });
        self.by_lhs.entry(lhs).or_insert_with(Vec::new).push(id);
        id
    }

    pub fn get(&self, id: RuleId) -> &RuleMeta {
        &self.rules[id.0 as usize]
    }

    pub fn rules_for_lhs(&self, lhs: SymbolId) -> &[RuleId] {
        self.by_lhs.get(&lhs).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleMeta> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
