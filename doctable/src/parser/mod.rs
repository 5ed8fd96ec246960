//! Parser module: turn one source file into a [`FileReport`].

pub mod declaration;
pub mod docblock;
pub mod signature;

use crate::model::{Description, Entry, FileReport};
use docblock::Lookup;

/// Scan `content` and build the report rows for the file called `name`.
///
/// Numbering restarts at 1 for every file. Declarations whose comment is
/// never closed are logged and left out without consuming a number.
pub fn parse_file(name: &str, content: &str) -> FileReport {
    let lines: Vec<&str> = content.lines().collect();
    let mut entries = Vec::new();

    for candidate in declaration::candidates(&lines) {
        let description = match docblock::locate(&lines, candidate.index) {
            Lookup::Found(body) => Description::Documented(body),
            Lookup::Missing => Description::Missing,
            Lookup::Unterminated { opened_at } => {
                tracing::warn!(
                    "skipping {}:{}: comment opened on line {} is never closed",
                    name,
                    candidate.index + 1,
                    opened_at + 1
                );
                continue;
            }
        };

        entries.push(Entry {
            number: entries.len() + 1,
            signature: signature::format(candidate.text),
            description,
        });
    }

    FileReport {
        name: name.to_string(),
        entries,
    }
}
