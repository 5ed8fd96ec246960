//! Compiler diagnostic lines → condensed records.
//!
//! Expects gcc-style lines, `path:line:col: kind: message [-Wflag]`. The
//! location is the first whitespace-delimited token and the message is the
//! fifth `:`-delimited field.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `[-Wunused-variable]`, `[-Wformat=]` and friends.
static RE_WARNING_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[-([^\]\s]+)\]").unwrap());

const ERROR_TRIGGER: &str = "error";

/// Index of the message among `:`-delimited fields.
const DESCRIPTION_FIELD: usize = 4;

const LABEL_WIDTH: usize = 32;
const LOCATION_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// Flag name without brackets, e.g. `Wformat`
    Warning(String),
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: RecordKind,
    pub location: String,
    pub description: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LineKind {
    Record(Record),
    /// Looked like a diagnostic but lacked the expected fields
    Malformed(&'static str),
    Ignored,
}

/// Classify one raw log line. Warnings take precedence over errors.
pub fn classify(line: &str) -> LineKind {
    if let Some(caps) = RE_WARNING_FLAG.captures(line) {
        let marker = caps.get(0).map_or(0, |m| m.start());
        let flag = caps[1].to_string();
        return build(RecordKind::Warning(flag), line, &line[..marker]);
    }
    if line.contains(ERROR_TRIGGER) {
        return build(RecordKind::Error, line, line);
    }
    LineKind::Ignored
}

fn build(kind: RecordKind, line: &str, fields: &str) -> LineKind {
    let Some(location) = location(line) else {
        return LineKind::Malformed("no location token");
    };
    let Some(description) = fields.split(':').nth(DESCRIPTION_FIELD) else {
        return LineKind::Malformed("fewer than five ':'-separated fields");
    };
    LineKind::Record(Record {
        kind,
        location: location.to_string(),
        description: description.trim().to_string(),
    })
}

/// First whitespace-delimited token, minus one trailing `:`.
fn location(line: &str) -> Option<&str> {
    let token = line.split_whitespace().next()?;
    Some(token.strip_suffix(':').unwrap_or(token))
}

impl Record {
    /// One fixed-width line, without the trailing newline.
    pub fn render(&self, seq: usize) -> String {
        format!(
            "({:02}) [-{:<lw$} {:<cw$} {}",
            seq,
            self.label(),
            self.location,
            self.description,
            lw = LABEL_WIDTH,
            cw = LOCATION_WIDTH,
        )
    }

    fn label(&self) -> String {
        match &self.kind {
            RecordKind::Warning(flag) => format!("{}]", flag),
            RecordKind::Error => "error]".to_string(),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Warning(flag) => write!(f, "warning -{}", flag),
            RecordKind::Error => f.write_str("error"),
        }
    }
}
