//! Data model for one generated report, independent of output format.

/// A top-level line that looks like it introduces a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// 0-based line index within the file
    pub index: usize,
    pub text: &'a str,
}

/// One normalized line of a comment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLine {
    Text(String),
    /// Blank separator inside the comment, kept as a visible break
    Break,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Documented(Vec<DocLine>),
    /// No `/*` anywhere above the declaration
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// Text before the first `{`, one parameter per line when there are several
    Formatted(String),
    /// Raw line; there was no `{` to truncate at
    NeedsFixing(String),
}

/// A single report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based, per file
    pub number: usize,
    pub signature: Signature,
    pub description: Description,
}

/// Everything rendered for one source file.
#[derive(Debug, Default)]
pub struct FileReport {
    /// Path relative to the scan root
    pub name: String,
    pub entries: Vec<Entry>,
}
