//! Reference frontend: builds a [`Tree`]/[`Catalog`] pair from a source
//! file without a real grammar, which is an external collaborator out of
//! this repo's scope. What's here is the smallest thing that makes the
//! CLI runnable end to end: blank-line-delimited top-level forms are
//! wrapped as a gap-separated sequence, so the sequence checker flags a
//! form whose first line doesn't start at the same column as its
//! siblings. A real deployment pairs `hoonlint_cli` with a parser that
//! hands the core a much richer tree via the same `Tree`/`Catalog` types.

use hoonlint_syntax::{Catalog, EnumeratedSets, RuleTable, SourceBuffer, SymbolTable, Tree};

struct Chunk {
    start: u32,
    end: u32,
}

fn leading_whitespace_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// A "form" is a maximal run of non-blank lines; its column is the first
/// non-whitespace byte of its first line, not the line's own start, so an
/// indented form is reported at its true indentation.
fn chunks_of(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut line_start = 0usize;
    let mut current: Option<Chunk> = None;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.trim().is_empty() {
            if let Some(chunk) = current.take() {
                chunks.push(chunk);
            }
        } else {
            let content_end = (line_start + trimmed.len()) as u32;
            match &mut current {
                Some(chunk) => chunk.end = content_end,
                None => {
                    let content_start = (line_start + leading_whitespace_len(trimmed)) as u32;
                    current = Some(Chunk { start: content_start, end: content_end });
                }
            }
        }
        line_start += line.len();
    }
    if let Some(chunk) = current.take() {
        chunks.push(chunk);
    }
    chunks
}

/// Build the reference tree and a catalog with a single "document" rule
/// (gap-separated sequence) over `buf`'s top-level forms.
pub fn build(buf: &SourceBuffer) -> (Tree, Catalog) {
    let mut symbols = SymbolTable::new();
    let gap = symbols.insert("GAP", true);
    let form = symbols.insert("form", true);
    let document_lhs = symbols.insert("documentForms", false);

    let mut rules = RuleTable::new();
    let document_rule = rules.insert(document_lhs, vec![form, form], Some(gap), &symbols);

    let sets = EnumeratedSets::default();
    let catalog = Catalog::build(symbols, rules, &sets);

    let chunks = chunks_of(buf.text());
    let mut builder = Tree::builder();
    builder.start_node(document_rule);
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            let prev_end = chunks[i - 1].end;
            builder.separator(gap, prev_end, chunk.start.saturating_sub(prev_end));
        }
        builder.lexeme(form, chunk.start, chunk.end - chunk.start);
    }
    builder.finish_node();
    let tree = builder.finish();

    (tree, catalog)
}
