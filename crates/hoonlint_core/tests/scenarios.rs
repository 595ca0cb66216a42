//! Integration tests reproducing hand-picked whitespace-shape scenarios,
//! built by hand through [`hoonlint_syntax::TreeBuilder`] rather than a
//! real parser, which is out of this repo's scope.

use hoonlint_core::walker::lint;
use hoonlint_core::{Filter, Report};
use hoonlint_syntax::{Catalog, EnumeratedSets, RuleTable, SourceBuffer, SymbolTable, Tree};

fn off(src: &str, needle: &str) -> u32 {
    src.find(needle).expect("needle present in fixture source") as u32
}

/// Byte offset of the Nth (0-based) occurrence of `needle`.
fn off_nth(src: &str, needle: &str, n: usize) -> u32 {
    src.match_indices(needle).nth(n).expect("enough occurrences").0 as u32
}

#[test]
fn scenario_1_correct_kingside_1_jogging_has_no_mistakes() {
    let src = "?-  x\n  %a  1\n  %b  2\n==\n";
    let buf = SourceBuffer::new(src);

    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let rune = symbols.insert("rune", true);
    let leaf = symbols.insert("leaf", true);
    let jogging_lhs = symbols.insert("tallWutHepJogging1", false);
    let jog_lhs = symbols.insert("rick5dJog", false);
    let seq_lhs = symbols.insert("mortarJoggingSeq", false);

    let mut rules = RuleTable::new();
    let jogging_rule = rules.insert(jogging_lhs, vec![rune, gap, leaf, gap, leaf, gap, leaf], None, &symbols);
    let jog_rule = rules.insert(jog_lhs, vec![leaf, gap, leaf], None, &symbols);
    let seq_rule = rules.insert(seq_lhs, vec![leaf, leaf], Some(gap), &symbols);

    let mut sets = EnumeratedSets::default();
    sets.tall_1_jogging.insert("tallWutHepJogging1".into());
    sets.tall_jog.insert("rick5dJog".into());
    sets.mortar_lhs.insert("mortarJoggingSeq".into());
    let catalog = Catalog::build(symbols, rules, &sets);

    // rune, head, a wrapping jogging-sequence node (itself a gap-separated
    // sequence of jogs), and the closing `==` -- four gap-indents, matching
    // the Tall1Jogging dispatch's `gaps[3]` closing lookup.
    let mut b = Tree::builder();
    b.start_node(jogging_rule);
    b.lexeme(rune, 0, 2); // "?-"
    b.separator(gap, 2, 2); // "  "
    b.lexeme(leaf, off(src, "x"), 1); // "x"
    b.separator(gap, 5, off(src, "%a") - 5); // "\n  "

    b.start_node(seq_rule);
    b.start_node(jog_rule);
    b.lexeme(leaf, off(src, "%a"), 2);
    b.separator(gap, off(src, "%a") + 2, 2);
    b.lexeme(leaf, off_nth(src, "1", 0), 1);
    b.finish_node();

    let jog1_end = off_nth(src, "1", 0) + 1;
    let jog2_start = off(src, "%b");
    b.separator(gap, jog1_end, jog2_start - jog1_end);

    b.start_node(jog_rule);
    b.lexeme(leaf, off(src, "%b"), 2);
    b.separator(gap, off(src, "%b") + 2, 2);
    b.lexeme(leaf, off_nth(src, "2", 0), 1);
    b.finish_node();
    b.finish_node(); // seq_rule

    let jog2_end = off_nth(src, "2", 0) + 1;
    let closing_start = off(src, "==");
    b.separator(gap, jog2_end, closing_start - jog2_end);
    b.lexeme(leaf, closing_start, 2); // "=="
    b.finish_node();
    let tree = b.finish();

    let findings = lint(&tree, &catalog, &buf);
    assert!(findings.is_empty(), "{:?}", findings);
}

fn build_scenario_2(src: &str) -> (Tree, Catalog, SourceBuffer) {
    let buf = SourceBuffer::new(src);

    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let rune = symbols.insert("rune", true);
    let leaf = symbols.insert("leaf", true);
    let jogging_lhs = symbols.insert("tallWutHepJogging1", false);
    let jog_lhs = symbols.insert("rick5dJog", false);

    let mut rules = RuleTable::new();
    let jogging_rule = rules.insert(jogging_lhs, vec![rune, gap, leaf, gap, leaf, gap, leaf], None, &symbols);
    let jog_rule = rules.insert(jog_lhs, vec![leaf, gap, leaf], None, &symbols);

    let mut sets = EnumeratedSets::default();
    sets.tall_1_jogging.insert("tallWutHepJogging1".into());
    sets.tall_jog.insert("rick5dJog".into());
    let catalog = Catalog::build(symbols, rules, &sets);

    let mut b = Tree::builder();
    b.start_node(jogging_rule);
    b.lexeme(rune, 0, 2);
    b.separator(gap, 2, 2);
    b.lexeme(leaf, off(src, "x"), 1);
    b.separator(gap, 5, off(src, "%a") - 5);

    b.start_node(jog_rule);
    b.lexeme(leaf, off(src, "%a"), 2);
    b.separator(gap, off(src, "%a") + 2, 2);
    b.lexeme(leaf, off_nth(src, "1", 0), 1);
    b.finish_node();

    let jog1_end = off_nth(src, "1", 0) + 1;
    let closing_start = off(src, "==");
    b.separator(gap, jog1_end, closing_start - jog1_end);
    b.lexeme(leaf, closing_start, 2);
    b.finish_node();
    let tree = b.finish();

    (tree, catalog, buf)
}

#[test]
fn scenario_2_off_by_one_head_is_flagged() {
    let src = "?-  x\n %a  1\n==\n";
    let (tree, catalog, buf) = build_scenario_2(src);

    let findings = lint(&tree, &catalog, &buf);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].mistake.description.contains("underindented by 1"));
}

/// A suppression tag matching scenario 2's one diagnostic eliminates it
/// and is marked used; a tag that doesn't match any emitted diagnostic
/// stays unused, which is what drives the CLI's "Unused suppression: ..."
/// line.
#[test]
fn scenario_6_matching_suppression_eliminates_the_diagnostic() {
    let src = "?-  x\n %a  1\n==\n";
    let (tree, catalog, buf) = build_scenario_2(src);
    let findings = lint(&tree, &catalog, &buf);
    assert_eq!(findings.len(), 1);
    let mistake = &findings[0].mistake;

    let mut filter = Filter::new();
    let suppression = format!("f.hoon {}:{} indent msg", mistake.line, mistake.column + 1);
    filter.load_suppressions(&suppression, "suppressions").unwrap();

    let mut report = Report::new();
    report.record("f.hoon", &findings[0].hoon_name, findings[0].parent_line, mistake, &buf, &mut filter, false);
    assert!(report.mistake_lines.is_empty());
    assert_eq!(filter.unused_suppressions().count(), 0);
}

#[test]
fn scenario_6_unmatched_suppression_stays_unused_and_diagnostic_still_fires() {
    let src = "?-  x\n %a  1\n==\n";
    let (tree, catalog, buf) = build_scenario_2(src);
    let findings = lint(&tree, &catalog, &buf);
    let mistake = &findings[0].mistake;

    let mut filter = Filter::new();
    let suppression = format!("f.hoon {}:{} indent msg", mistake.line + 10, mistake.column + 1);
    filter.load_suppressions(&suppression, "suppressions").unwrap();

    let mut report = Report::new();
    report.record("f.hoon", &findings[0].hoon_name, findings[0].parent_line, mistake, &buf, &mut filter, false);
    assert_eq!(report.mistake_lines.len(), 1);
    assert_eq!(filter.unused_suppressions().count(), 1);
}

#[test]
fn scenario_4_zero_jogging_closing_on_rune_line_is_flagged() {
    let src = "?|  a  b  ==\n";
    let buf = SourceBuffer::new(src);

    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let rune = symbols.insert("rune", true);
    let leaf = symbols.insert("leaf", true);
    let jogging_lhs = symbols.insert("tallWutBarJogging0", false);

    let mut rules = RuleTable::new();
    let jogging_rule = rules.insert(jogging_lhs, vec![rune, gap, leaf, gap, leaf, gap, leaf], None, &symbols);

    let mut sets = EnumeratedSets::default();
    sets.tall_0_jogging.insert("tallWutBarJogging0".into());
    let catalog = Catalog::build(symbols, rules, &sets);

    let mut b = Tree::builder();
    b.start_node(jogging_rule);
    b.lexeme(rune, 0, 2); // "?|"
    b.separator(gap, 2, 2);
    b.lexeme(leaf, off(src, "a"), 1);
    b.separator(gap, off(src, "a") + 1, 2);
    b.lexeme(leaf, off(src, "b"), 1); // stands in for the jogging sequence
    b.separator(gap, off(src, "b") + 1, 2);
    b.lexeme(leaf, off(src, "=="), 2); // "=="
    b.finish_node();
    let tree = b.finish();

    let findings = lint(&tree, &catalog, &buf);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].mistake.description, "TISTIS on rune line; should not be.");
}

/// A single queenside jog (chosen by the census because its lone jog's
/// head sits at `rune_column + 4`) with a split head/body, the body
/// landing at `rune_column + 2` as expected on that side.
fn build_scenario_3(src: &str) -> (Tree, Catalog, SourceBuffer) {
    let buf = SourceBuffer::new(src);

    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let rune = symbols.insert("rune", true);
    let leaf = symbols.insert("leaf", true);
    let jogging_lhs = symbols.insert("tallWutHepJogging1", false);
    let jog_lhs = symbols.insert("rick5dJog", false);

    let mut rules = RuleTable::new();
    let jogging_rule = rules.insert(jogging_lhs, vec![rune, gap, leaf, gap, leaf, gap, leaf], None, &symbols);
    let jog_rule = rules.insert(jog_lhs, vec![leaf, gap, leaf], None, &symbols);

    let mut sets = EnumeratedSets::default();
    sets.tall_1_jogging.insert("tallWutHepJogging1".into());
    sets.tall_jog.insert("rick5dJog".into());
    let catalog = Catalog::build(symbols, rules, &sets);

    let mut b = Tree::builder();
    b.start_node(jogging_rule);
    b.lexeme(rune, 0, 2); // "?-"
    b.separator(gap, 2, off(src, "x") - 2);
    b.lexeme(leaf, off(src, "x"), 1);
    b.separator(gap, off(src, "x") + 1, off(src, "%a") - off(src, "x") - 1);

    b.start_node(jog_rule);
    b.lexeme(leaf, off(src, "%a"), 2);
    b.separator(gap, off(src, "%a") + 2, off_nth(src, "1", 0) - off(src, "%a") - 2);
    b.lexeme(leaf, off_nth(src, "1", 0), 1);
    b.finish_node();

    let jog_end = off_nth(src, "1", 0) + 1;
    let closing_start = off(src, "==");
    b.separator(gap, jog_end, closing_start - jog_end);
    b.lexeme(leaf, closing_start, 2);
    b.finish_node();
    let tree = b.finish();

    (tree, catalog, buf)
}

#[test]
fn scenario_3_correct_queenside_split_jog_has_no_mistakes() {
    let src = "?-    x\n    %a\n  1\n==\n";
    let (tree, catalog, buf) = build_scenario_3(src);
    let findings = lint(&tree, &catalog, &buf);
    assert!(findings.is_empty(), "{:?}", findings);
}

#[test]
fn scenario_3_misaligned_queenside_split_body_is_flagged() {
    let src = "?-    x\n    %a\n    1\n==\n";
    let (tree, catalog, buf) = build_scenario_3(src);
    let findings = lint(&tree, &catalog, &buf);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].mistake.description.contains("jog body"));
}

#[test]
fn scenario_5_semsig_sequence_targets_grandparent_plus_two() {
    let src = ";;\n  a\n  b\n";
    let buf = SourceBuffer::new(src);

    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let leaf = symbols.insert("leaf", true);
    let semsig_lhs = symbols.insert("tallSemsig", false);
    let wrapper_lhs = symbols.insert("mortarWrapper", false);
    let seq_lhs = symbols.insert("mortarSeq", false);

    let mut rules = RuleTable::new();
    let semsig_rule = rules.insert(semsig_lhs, vec![leaf], None, &symbols);
    let wrapper_rule = rules.insert(wrapper_lhs, vec![leaf], None, &symbols);
    let seq_rule = rules.insert(seq_lhs, vec![leaf, leaf], Some(gap), &symbols);

    let mut sets = EnumeratedSets::default();
    sets.mortar_lhs.insert("mortarWrapper".into());
    let catalog = Catalog::build(symbols, rules, &sets);

    // semsig (grandparent) at column 0, an intervening mortar wrapper
    // (parent), and the sequence's own elements two stops in: grandparent
    // at column 0, each element at column 2.
    let mut b = Tree::builder();
    b.start_node(semsig_rule);
    b.start_node(wrapper_rule);
    b.start_node(seq_rule);
    b.lexeme(leaf, off(src, "a"), 1);
    b.separator(gap, off(src, "a") + 1, off(src, "b") - off(src, "a") - 1);
    b.lexeme(leaf, off(src, "b"), 1);
    b.finish_node();
    b.finish_node();
    b.finish_node();
    let tree = b.finish();

    let findings = lint(&tree, &catalog, &buf);
    assert!(findings.is_empty(), "{:?}", findings);
}

#[test]
fn scenario_5_misaligned_semsig_sequence_is_flagged() {
    let src = ";;\n  a\n b\n";
    let buf = SourceBuffer::new(src);

    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let leaf = symbols.insert("leaf", true);
    let semsig_lhs = symbols.insert("tallSemsig", false);
    let wrapper_lhs = symbols.insert("mortarWrapper", false);
    let seq_lhs = symbols.insert("mortarSeq", false);

    let mut rules = RuleTable::new();
    let semsig_rule = rules.insert(semsig_lhs, vec![leaf], None, &symbols);
    let wrapper_rule = rules.insert(wrapper_lhs, vec![leaf], None, &symbols);
    let seq_rule = rules.insert(seq_lhs, vec![leaf, leaf], Some(gap), &symbols);

    let mut sets = EnumeratedSets::default();
    sets.mortar_lhs.insert("mortarWrapper".into());
    let catalog = Catalog::build(symbols, rules, &sets);

    let mut b = Tree::builder();
    b.start_node(semsig_rule);
    b.start_node(wrapper_rule);
    b.start_node(seq_rule);
    b.lexeme(leaf, off(src, "a"), 1);
    b.separator(gap, off(src, "a") + 1, off(src, "b") - off(src, "a") - 1);
    b.lexeme(leaf, off(src, "b"), 1);
    b.finish_node();
    b.finish_node();
    b.finish_node();
    let tree = b.finish();

    let findings = lint(&tree, &catalog, &buf);
    assert_eq!(findings.len(), 1);
}
