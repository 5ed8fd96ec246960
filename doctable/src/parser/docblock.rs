//! Locate the block comment documenting a declaration.
//!
//! The nearest `/*` above the declaration wins, even when it belongs to an
//! earlier function; the body runs until `*/` or the first `@tag` line.

use crate::model::DocLine;

const OPEN: &str = "/*";
const CLOSE: &str = "*/";
const TAG: char = '@';

/// Result of looking up the doc block for one declaration.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(Vec<DocLine>),
    /// No opener between the declaration and the top of the file
    Missing,
    /// The opener at `opened_at` is never closed
    Unterminated { opened_at: usize },
}

/// Search backward from `index` for the nearest comment opener and collect its body.
pub fn locate(lines: &[&str], index: usize) -> Lookup {
    let upper = index.min(lines.len());
    let Some(opened_at) = lines[..upper].iter().rposition(|l| l.contains(OPEN)) else {
        return Lookup::Missing;
    };

    let opener = lines[opened_at];
    if let Some(body) = inline_body(opener) {
        return Lookup::Found(vec![normalize(body)]);
    }

    let mut body = Vec::new();
    for line in &lines[opened_at + 1..] {
        if line.contains(CLOSE) || line.contains(TAG) {
            return Lookup::Found(body);
        }
        body.push(normalize(line));
    }
    Lookup::Unterminated { opened_at }
}

/// Text between `/*` and `*/` when both sit on the opener line.
fn inline_body(line: &str) -> Option<&str> {
    let start = line.find(OPEN)? + OPEN.len();
    let len = line[start..].find(CLOSE)?;
    Some(&line[start..start + len])
}

fn normalize(line: &str) -> DocLine {
    let text = line.trim_start().trim_start_matches('*').trim_start();
    if text.trim().is_empty() {
        DocLine::Break
    } else {
        DocLine::Text(text.to_string())
    }
}
