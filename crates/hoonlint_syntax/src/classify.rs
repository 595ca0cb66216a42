//! Rule Classifier: partitions rules into disjoint whitespace
//! shape classes by LHS name, precomputed once into a `rule_id -> shape`
//! map so the tree walker dispatches with a single lookup.

use crate::rule::RuleId;
use hashbrown::HashSet;

/// The disjoint shape classes a rule can be assigned to. `Backdented` is
/// the implicit catch-all for any tall rule that doesn't fall into one of
/// the named classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    TallBody,
    TallNote,
    TallLusLus,
    TallJog,
    Tall0Jogging,
    Tall1Jogging,
    Tall2Jogging,
    TallJogging1Prefix,
    Backdented,
}

/// The name-based sets an implementation must enumerate from the grammar.
/// These are supplied by whoever constructs the `Catalog` (the parser
/// integration, or a test fixture); the classifier only knows how to turn
/// them into a `rule_id -> ShapeClass` map plus the `tall<Rune6>` /
/// `tall<Rune6>Mold` naming convention for the rune-indented shapes.
#[derive(Debug, Default)]
pub struct EnumeratedSets {
    pub tall_note: HashSet<String>,
    pub tall_luslus: HashSet<String>,
    pub tall_jog: HashSet<String>,
    pub tall_0_jogging: HashSet<String>,
    pub tall_1_jogging: HashSet<String>,
    pub tall_2_jogging: HashSet<String>,
    pub tall_jogging1_prefix: HashSet<String>,
    pub mortar_lhs: HashSet<String>,
}

/// `name` matches `tall<Rune6>` or `tall<Rune6>Mold`: the `tall` prefix
/// followed by exactly six alphabetic characters (two three-letter rune
/// spellings, e.g. `WutHep`), optionally followed by `Mold`.
pub fn is_tall_rune_name(name: &str) -> bool {
    let rest = match name.strip_prefix("tall") {
        Some(rest) => rest,
        None => return false,
    };
    let rune = rest.strip_suffix("Mold").unwrap_or(rest);
    rune.len() == 6 && rune.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Classify a single rule's LHS name. Disjoint by construction: the
/// enumerated sets are checked before the rune-name pattern, and a name
/// can only land in one enumerated set (callers are responsible for
/// keeping the sets themselves disjoint, as the grammar guarantees no LHS
/// name is shared between shapes).
pub fn classify_name(lhs_name: &str, sets: &EnumeratedSets) -> ShapeClass {
    if sets.tall_luslus.contains(lhs_name) {
        ShapeClass::TallLusLus
    } else if sets.tall_jog.contains(lhs_name) {
        ShapeClass::TallJog
    } else if sets.tall_0_jogging.contains(lhs_name) {
        ShapeClass::Tall0Jogging
    } else if sets.tall_1_jogging.contains(lhs_name) {
        ShapeClass::Tall1Jogging
    } else if sets.tall_2_jogging.contains(lhs_name) {
        ShapeClass::Tall2Jogging
    } else if sets.tall_jogging1_prefix.contains(lhs_name) {
        ShapeClass::TallJogging1Prefix
    } else if sets.tall_note.contains(lhs_name) {
        ShapeClass::TallNote
    } else if is_tall_rune_name(lhs_name) {
        ShapeClass::TallBody
    } else {
        ShapeClass::Backdented
    }
}

/// Precomputed `rule_id -> ShapeClass` map, built once during catalog
/// construction.
#[derive(Debug, Default)]
pub struct Classifier {
    by_rule: hashbrown::HashMap<RuleId, ShapeClass>,
}

impl Classifier {
    pub fn build<'a>(rules: impl Iterator<Item = (RuleId, &'a str)>, sets: &EnumeratedSets) -> Self {
        let by_rule = rules.map(|(id, name)| (id, classify_name(name, sets))).collect();
        Classifier { by_rule }
    }

    pub fn shape_of(&self, rule: RuleId) -> ShapeClass {
        self.by_rule.get(&rule).copied().unwrap_or(ShapeClass::Backdented)
    }
}
