//! Whole-log transformation guarded by the `<formatted>` marker line.

use crate::record::{classify, LineKind};

/// First line of every condensed log.
pub const MARKER: &str = "<formatted>";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The log already starts with [`MARKER`]; nothing to do
    AlreadyFormatted,
    Condensed {
        text: String,
        records: usize,
        skipped: usize,
    },
}

pub fn is_formatted(input: &str) -> bool {
    input
        .lines()
        .next()
        .is_some_and(|first| first.trim_end() == MARKER)
}

pub fn condense(input: &str) -> Outcome {
    if is_formatted(input) {
        return Outcome::AlreadyFormatted;
    }

    let mut text = format!("{}\n", MARKER);
    let mut records = 0;
    let mut skipped = 0;

    for (index, line) in input.lines().enumerate() {
        match classify(line) {
            LineKind::Record(record) => {
                tracing::debug!("line {}: {} at {}", index + 1, record.kind, record.location);
                text.push_str(&record.render(records));
                text.push('\n');
                records += 1;
            }
            LineKind::Malformed(reason) => {
                tracing::warn!("skipping line {}: {}: {}", index + 1, reason, line.trim());
                skipped += 1;
            }
            LineKind::Ignored => {}
        }
    }

    Outcome::Condensed {
        text,
        records,
        skipped,
    }
}

/// Condensed text for `input`, or `input` itself when it is already condensed.
pub fn condense_text(input: &str) -> String {
    match condense(input) {
        Outcome::AlreadyFormatted => input.to_string(),
        Outcome::Condensed { text, .. } => text,
    }
}
