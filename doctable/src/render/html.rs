//! HTML table renderer: one `<table>` per source file for manual test tracking.
//!
//! Every table is seven columns wide: `#` (1), function (2), description (4).
//! Each declaration row is followed by a column-title row and three blank
//! rows to fill in by hand; those rows span the first three columns with a
//! single empty cell.

use crate::model::*;

/// Blank rows left under each declaration for test cases.
const PLACEHOLDER_ROWS: usize = 3;

const MANUAL_COLUMNS: [&str; 4] = ["Sample Input", "Expected Result", "Actual Result", "Pass / Fail"];

pub const MISSING_DESCRIPTION: &str = "No documentation found.";

/// Render all reports in traversal order.
pub fn render_all(reports: &[FileReport]) -> String {
    reports.iter().map(render_report).collect()
}

pub fn render_report(report: &FileReport) -> String {
    let mut out = String::new();

    out.push_str("<table>\n");
    out.push_str("\t<tr>\n");
    out.push_str("\t\t<th> # </th>\n");
    out.push_str(&format!(
        "\t\t<th colspan=\"2\"> Functions in <code>{}</code> </th>\n",
        html_escape(&report.name)
    ));
    out.push_str("\t\t<th colspan=\"4\"> Description </th>\n");
    out.push_str("\t</tr>\n");

    for entry in &report.entries {
        out.push_str(&render_entry(entry));
    }

    out.push_str("</table>\n\n");
    out
}

fn render_entry(entry: &Entry) -> String {
    let mut out = String::new();

    out.push_str("\t<tr>\n");
    out.push_str(&format!("\t\t<td>{}</td>\n", entry.number));
    out.push_str(&format!(
        "\t\t<td colspan=\"2\"><pre style=\"background: 0;\">{}</pre></td>\n",
        render_signature(&entry.signature)
    ));
    out.push_str(&format!(
        "\t\t<td colspan=\"4\">{}</td>\n",
        render_description(&entry.description)
    ));
    out.push_str("\t</tr>\n");

    out.push_str("\t<tr>\n");
    out.push_str("\t\t<td colspan=\"3\"></td>\n");
    for title in MANUAL_COLUMNS {
        out.push_str(&format!("\t\t<td><i><b>{}</b></i></td>\n", title));
    }
    out.push_str("\t</tr>\n");

    for _ in 0..PLACEHOLDER_ROWS {
        out.push_str("\t<tr>\n");
        out.push_str("\t\t<td colspan=\"3\"></td>\n");
        for _ in MANUAL_COLUMNS {
            out.push_str("\t\t<td><code></code></td>\n");
        }
        out.push_str("\t</tr>\n");
    }

    out
}

fn render_signature(signature: &Signature) -> String {
    match signature {
        Signature::Formatted(text) => html_escape(text),
        Signature::NeedsFixing(raw) => format!("FIX THIS: {}", html_escape(raw)),
    }
}

fn render_description(description: &Description) -> String {
    match description {
        Description::Documented(lines) => lines
            .iter()
            .map(|line| match line {
                DocLine::Text(text) => html_escape(text),
                DocLine::Break => "<br>".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Description::Missing => MISSING_DESCRIPTION.to_string(),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
