//! Minimal line-indexing helpers shared by the Position Index and the CLI's
//! windowed renderer.

/// Yields the byte offset of the start of each line in `source`, beginning
/// with `0` for the first line. A caller can turn an arbitrary byte offset
/// into a 1-based line number with `line_starts(src).collect::<Vec<_>>()`
/// and a `binary_search`, falling back to `next_line - 1` on a miss (an
/// offset that isn't itself the start of a line).
pub fn line_starts(source: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
}
