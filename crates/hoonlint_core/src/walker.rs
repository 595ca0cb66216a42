//! Tree Walker & Context: a depth-first preorder traversal that threads a
//! [`LintContext`] down by value, dispatches each node's shape checker,
//! and collects every [`Mistake`] produced.

use hoonlint_syntax::classify::ShapeClass;
use hoonlint_syntax::tree::{NodeIndex, NodeKind};
use hoonlint_syntax::{Catalog, RuleId, SourceBuffer, Tree};

use crate::context::{ChessSide, LintContext};
use crate::gap::gap_indents;
use crate::internal_error;
use crate::jogging::{self, JogGeometry};
use crate::mistake::Mistake;
use crate::shapes;

/// A mistake paired with the diagnostic-naming context the reporter needs:
/// the nearest non-mortar hoon name and the enclosing node's own line.
#[derive(Debug, Clone)]
pub struct Finding {
    pub hoon_name: String,
    pub parent_line: u32,
    pub mistake: Mistake,
}

/// Run the walk from the tree's root with a fresh context, as a single
/// invocation of the core over one already-built CST.
pub fn lint(tree: &Tree, catalog: &Catalog, buf: &SourceBuffer) -> Vec<Finding> {
    walk(tree, catalog, buf, tree.root(), &LintContext::root())
}

fn node_position(buf: &SourceBuffer, tree: &Tree, node: NodeIndex) -> (u32, u32) {
    buf.line_column(tree.node(node).start as usize)
}

/// Every `TallJog` descendant reachable from `node` without passing
/// through another jogging's rune -- in practice this jogging's own
/// sequence of jogs, since jogs never nest jogs of a different jogging.
fn jogs_of(tree: &Tree, catalog: &Catalog, node: NodeIndex) -> Vec<NodeIndex> {
    let mut out = Vec::new();
    for descendant in tree.descendants(node) {
        if let NodeKind::Node { rule_id } = tree.node(descendant).kind {
            if catalog.shape_of(rule_id) == ShapeClass::TallJog {
                out.push(descendant);
            }
        }
    }
    out
}

fn jog_geometry(tree: &Tree, catalog: &Catalog, buf: &SourceBuffer, jog_node: NodeIndex) -> Option<JogGeometry> {
    let gaps = gap_indents(tree, catalog, buf, jog_node);
    if gaps.len() < 2 {
        return None;
    }
    let head = gaps[0];
    let body = gaps[1];
    let gap_len = if head.line == body.line {
        let head_node = tree.children(jog_node).next()?;
        let head_end = tree.node(head_node).start + tree.node(head_node).length;
        let (_, head_end_col) = buf.line_column(head_end as usize);
        body.column.saturating_sub(head_end_col)
    } else {
        0
    };
    Some(JogGeometry {
        head_line: head.line,
        head_column: head.column,
        body_line: body.line,
        body_column: body.column,
        gap_len,
    })
}

fn closing_literal(tree: &Tree, buf: &SourceBuffer, closing_node: NodeIndex) -> String {
    let node = tree.node(closing_node);
    buf.literal(node.start as usize, node.length as usize).to_string()
}

/// `ctx.ancestors` (not yet extended with the current node) holds the
/// chain up to and including the parent; the entry before that, if any,
/// is the grandparent. Returns its column when its LHS is `tallSemsig`,
/// else `None`.
fn grandparent_is_tall_semsig(catalog: &Catalog, buf: &SourceBuffer, ctx: &LintContext) -> Option<u32> {
    let ancestors = &ctx.ancestors;
    if ancestors.len() < 2 {
        return None;
    }
    let (grandparent_rule, grandparent_start) = ancestors[ancestors.len() - 2];
    if catalog.lhs_name(grandparent_rule) == "tallSemsig" {
        let (_, col) = buf.line_column(grandparent_start as usize);
        Some(col)
    } else {
        None
    }
}

fn is_jogging_shape(shape: ShapeClass) -> bool {
    matches!(
        shape,
        ShapeClass::Tall0Jogging | ShapeClass::Tall1Jogging | ShapeClass::Tall2Jogging | ShapeClass::TallJogging1Prefix
    )
}

fn walk(tree: &Tree, catalog: &Catalog, buf: &SourceBuffer, node: NodeIndex, ctx: &LintContext) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut mistakes: Vec<Mistake> = Vec::new();
    let (line, column) = node_position(buf, tree, node);

    let rule_id = match tree.node(node).kind {
        NodeKind::Node { rule_id } => rule_id,
        // leaves carry no shape of their own; the walk only recurses
        // through interior nodes.
        _ => return findings,
    };
    let shape = catalog.shape_of(rule_id);
    tracing::debug!(rule = catalog.lhs_name(rule_id), ?shape, line, column, "visiting node");

    let mut child_ctx = ctx.enter_line(line, column).with_ancestor(rule_id, tree.node(node).start);

    if matches!(shape, ShapeClass::TallBody | ShapeClass::TallNote) {
        if shape == ShapeClass::TallBody {
            child_ctx = child_ctx.with_body_indent(column);
        }
        child_ctx = child_ctx.with_tall_rune_indent(column);
    }

    if !catalog.is_mortar(catalog.rule(rule_id).lhs) {
        child_ctx = child_ctx.with_hoon_name(catalog.lhs_name(rule_id).into());
    }

    let gaps = gap_indents(tree, catalog, buf, node);

    if is_jogging_shape(shape) {
        let jogs = jogs_of(tree, catalog, node);
        let geometries: Vec<JogGeometry> = jogs
            .iter()
            .filter_map(|&j| jog_geometry(tree, catalog, buf, j))
            .collect();
        let census = jogging::census(column, &geometries);
        child_ctx = child_ctx.with_jogging(census.side, column, census.body_column);
    }

    // Gap-separated sequence rules (gapiness == -1) are not among the
    // named LHS shape classes; they're recognized by rule metadata
    // instead and checked against a fixed column rather than the
    // backdented staircase.
    let is_sequence = catalog.rule(rule_id).gapiness == -1;

    match shape {
        ShapeClass::TallBody | ShapeClass::Backdented if is_sequence => {
            let semsig_grandparent_col = grandparent_is_tall_semsig(catalog, buf, ctx);
            mistakes.extend(shapes::sequence::check(&gaps, column, semsig_grandparent_col));
        }
        ShapeClass::TallBody | ShapeClass::Backdented => {
            mistakes.extend(shapes::backdented::check(&gaps));
        }
        ShapeClass::TallNote => {
            let note_indent = ctx.note_indent_or(column);
            mistakes.extend(shapes::cast::check(&gaps, note_indent));
        }
        ShapeClass::TallLusLus => {
            mistakes.extend(shapes::luslus::check(&gaps));
        }
        ShapeClass::TallJog => {
            // A jog is only ever classified inside a jogging's own subtree,
            // which always populates these three fields before descending.
            let side = internal_error::expect(ctx.chess_side, "TallJog node reached with no enclosing chess side");
            let rune_column =
                internal_error::expect(ctx.jog_rune_column, "TallJog node reached with no enclosing jogging rune column");
            let jog_body_column =
                internal_error::expect(ctx.jog_body_column, "TallJog node reached with no enclosing jogging body column");
            let geometry = internal_error::expect(
                jog_geometry(tree, catalog, buf, node),
                "TallJog node has fewer than 2 gap indents",
            );
            mistakes.extend(shapes::jog::check(&geometry, side, rune_column, jog_body_column));
            child_ctx = child_ctx.without_jog_fields();
        }
        ShapeClass::Tall0Jogging => {
            let closing = *internal_error::expect(gaps.get(3), "Tall0Jogging node has fewer than 4 gap indents");
            let literal = closing_literal(tree, buf, closing.node);
            mistakes.extend(shapes::jogging0::check(gaps[0], gaps[1], closing, &literal));
        }
        ShapeClass::Tall1Jogging => {
            let closing = *internal_error::expect(gaps.get(3), "Tall1Jogging node has fewer than 4 gap indents");
            let literal = closing_literal(tree, buf, closing.node);
            let side = child_ctx.chess_side.unwrap_or(ChessSide::Kingside);
            mistakes.extend(shapes::jogging1::check(gaps[0], gaps[1], closing, side, &literal));
        }
        ShapeClass::Tall2Jogging => {
            let closing = *internal_error::expect(gaps.get(4), "Tall2Jogging node has fewer than 5 gap indents");
            let literal = closing_literal(tree, buf, closing.node);
            let side = child_ctx.chess_side.unwrap_or(ChessSide::Kingside);
            mistakes.extend(shapes::jogging2::check(gaps[0], gaps[1], gaps[2], closing, side, &literal));
        }
        ShapeClass::TallJogging1Prefix => {
            if gaps.len() < 3 {
                internal_error::bug("TallJogging1Prefix node has fewer than 3 gap indents");
            }
            let closing = gaps[gaps.len() - 1];
            let tail = gaps[gaps.len() - 2];
            let literal = closing_literal(tree, buf, closing.node);
            mistakes.extend(shapes::jogging_prefix::check(gaps[0], tail, closing, &literal));
        }
    }

    let hoon_name = child_ctx.hoon_name.as_deref().unwrap_or("?").to_string();
    findings.extend(mistakes.into_iter().map(|mistake| Finding {
        hoon_name: hoon_name.clone(),
        parent_line: line,
        mistake,
    }));

    for child in tree.children(node) {
        findings.extend(walk(tree, catalog, buf, child, &child_ctx));
    }

    findings
}
