//! Symbol half of the Symbol/Rule Catalog: per-symbol metadata
//! and the gap-terminal naming convention.

use hashbrown::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

#[derive(Debug, Clone)]
pub struct SymbolMeta {
    pub name: String,
    pub id: SymbolId,
    pub is_lexeme: bool,
    pub is_gap: bool,
}

/// A symbol is a gap if its name is exactly `GAP`, or matches the
/// language's rune-named gap terminal pattern:
/// `<uppercase><vowel><uppercase><uppercase><vowel><uppercase>GAP`, e.g.
/// `TISTISGAP` for the rune pair that spells `==`/`;;`-adjacent gaps.
pub fn is_gap_name(name: &str) -> bool {
    if name == "GAP" {
        return true;
    }
    const VOWELS: &[u8] = b"AEIOU";
    let bytes = name.as_bytes();
    if bytes.len() != 9 || &bytes[6..9] != b"GAP" {
        return false;
    }
    let is_upper = |b: u8| b.is_ascii_uppercase();
    let is_vowel = |b: u8| VOWELS.contains(&b);
    is_upper(bytes[0])
        && is_vowel(bytes[1])
        && is_upper(bytes[2])
        && is_upper(bytes[3])
        && is_vowel(bytes[4])
        && is_upper(bytes[5])
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<SymbolMeta>,
    by_name: HashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Register a symbol, classifying it as a gap terminal by name. Callers
    /// building a catalog from a real grammar call this once per grammar
    /// symbol.
    pub fn insert(&mut self, name: impl Into<String>, is_lexeme: bool) -> SymbolId {
        let name = name.into();
        let id = SymbolId(self.symbols.len() as u32);
        let is_gap = is_gap_name(&name);
        self.by_name.insert(name.clone(), id);
        self.symbols.push(SymbolMeta {
            name,
            id,
            is_lexeme,
            is_gap,
        });
        id
    }

    pub fn get(&self, id: SymbolId) -> &SymbolMeta {
        &self.symbols[id.0 as usize]
    }

    pub fn by_name(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    pub fn is_gap(&self, id: SymbolId) -> bool {
        self.get(id).is_gap
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolMeta> {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_gap_name() {
        assert!(is_gap_name("GAP"));
    }

    #[test]
    fn rune_gap_pattern_matches() {
        assert!(is_gap_name("TISTISGAP"));
        assert!(is_gap_name("WUTHEPGAP"));
    }

    #[test]
    fn non_gap_names_are_rejected() {
        assert!(!is_gap_name("tallWutHep"));
        assert!(!is_gap_name("TISTIS"));
        assert!(!is_gap_name("tisGAP"));
        assert!(!is_gap_name("TXSTISGAP"));
    }

    #[test]
    fn insert_and_lookup_round_trips() {
        let mut table = SymbolTable::new();
        let id = table.insert("GAP", true);
        assert!(table.is_gap(id));
        assert_eq!(table.by_name("GAP"), Some(id));
    }
}
