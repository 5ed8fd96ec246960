//! Signature cleanup for the report's function column.

use crate::model::Signature;

pub fn format(line: &str) -> Signature {
    let Some(brace) = line.find('{') else {
        return Signature::NeedsFixing(line.trim_end().to_string());
    };
    let head = line[..brace].trim_end();
    if !head.contains(',') {
        return Signature::Formatted(head.to_string());
    }
    Signature::Formatted(split_params(head).unwrap_or_else(|| head.to_string()))
}

/// `void move(int x, int y)` → `void move(\n\tint x,\n\tint y\n)`.
fn split_params(head: &str) -> Option<String> {
    let open = head.find('(')?;
    let close = head.rfind(')')?;
    if close < open {
        return None;
    }
    let params: Vec<&str> = head[open + 1..close].split(',').map(str::trim).collect();
    Some(format!(
        "{}\n\t{}\n{}",
        &head[..=open],
        params.join(",\n\t"),
        &head[close..]
    ))
}
