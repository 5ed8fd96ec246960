//! Declaration detection: a substring heuristic, not a C grammar.
//!
//! A line is taken to introduce a function when it starts in column 0,
//! has an opening parenthesis and carries none of the characters that mark
//! comments, preprocessor lines, block ends or statements. Known misses:
//! signatures split across lines are flagged rather than joined, and macro
//! invocations or initializers that fit the same shape are picked up too.

use crate::model::Candidate;

/// Characters that rule a line out: preprocessor, comment, block close, statement end.
const EXCLUDED: &[char] = &['#', '/', '}', ';'];

pub fn is_candidate(line: &str) -> bool {
    !line.is_empty()
        && line.trim_start().len() == line.len()
        && !line.contains(EXCLUDED)
        && line.contains('(')
}

/// Lazily yield every candidate line in file order.
pub fn candidates<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = Candidate<'a>> + 'a {
    lines
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, line)| is_candidate(line))
        .map(|(index, text)| Candidate { index, text })
}
