//! The whitespace-shape linter core: the rule catalog, the tree walker and
//! the shape checkers it dispatches to, the suppression/inclusion filter,
//! and the report accumulator they feed.
//!
//! The rule set is the fixed, closed set of whitespace shapes named in
//! [`hoonlint_syntax::classify`] rather than a pluggable rule registry:
//! dispatch is a single `rule_id -> ShapeClass` lookup computed once per
//! rule rather than re-tested per node.

pub mod context;
pub mod gap;
pub mod internal_error;
pub mod jogging;
pub mod mistake;
pub mod report;
pub mod shapes;
pub mod suppress;
pub mod walker;

pub use context::{ChessSide, LintContext};
pub use mistake::{Mistake, MistakeDetail, MistakeKind};
pub use report::Report;
pub use suppress::{Filter, SuppressionError, Tag};
pub use walker::{lint, Finding};

use hoonlint_syntax::{Catalog, SourceBuffer, Tree};

/// Run the whole pipeline over one already-parsed tree: walk, then feed
/// every finding through the suppression/inclusion filter into a fresh
/// [`Report`]. This is the core's one entry point a CLI integration calls;
/// everything upstream of the tree -- grammar, parser, option parsing --
/// is the caller's concern.
pub fn run(file: &str, tree: &Tree, catalog: &Catalog, buf: &SourceBuffer, filter: &mut Filter, census_whitespace: bool) -> Report {
    let mut report = Report::new();
    for finding in lint(tree, catalog, buf) {
        report.record(file, &finding.hoon_name, finding.parent_line, &finding.mistake, buf, filter, census_whitespace);
    }
    report
}
