//! Mistake records: the product of every shape checker. Immutable
//! once produced; never mutated after a checker returns it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MistakeKind {
    Indent,
    Sequence,
}

impl MistakeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MistakeKind::Indent => "indent",
            MistakeKind::Sequence => "sequence",
        }
    }
}

/// The extra datum a mistake carries: a staircase mistake reports the
/// expected backdent column, a simple column mismatch
/// reports the expected column, and a few mistakes (e.g. "rune on its own
/// closing line") report an expected line instead of a column.
#[derive(Debug, Clone, Copy)]
pub enum MistakeDetail {
    ExpectedLine(u32),
    ExpectedColumn(u32),
    BackdentColumn(u32),
    None,
}

#[derive(Debug, Clone)]
pub struct Mistake {
    pub kind: MistakeKind,
    pub description: String,
    pub line: u32,
    pub column: u32,
    pub child_index: usize,
    pub detail: MistakeDetail,
}

impl Mistake {
    pub fn indent(
        description: impl Into<String>,
        line: u32,
        column: u32,
        child_index: usize,
        detail: MistakeDetail,
    ) -> Self {
        Mistake {
            kind: MistakeKind::Indent,
            description: description.into(),
            line,
            column,
            child_index,
            detail,
        }
    }

    pub fn sequence(
        description: impl Into<String>,
        line: u32,
        column: u32,
        child_index: usize,
        detail: MistakeDetail,
    ) -> Self {
        Mistake {
            kind: MistakeKind::Sequence,
            description: description.into(),
            line,
            column,
            child_index,
            detail,
        }
    }
}

/// Phrases a column mismatch as a reader expects to see it:
/// "... underindented by 1." / "... overindented by 2."
pub fn describe_column_mismatch(what: &str, observed: u32, expected: u32) -> String {
    if observed < expected {
        format!(
            "{} underindented by {}; expected column {}.",
            what,
            expected - observed,
            expected
        )
    } else {
        format!(
            "{} overindented by {}; expected column {}.",
            what,
            observed - expected,
            expected
        )
    }
}
