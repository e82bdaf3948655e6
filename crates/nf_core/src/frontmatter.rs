//! Line-oriented front matter writer.
//!
//! Values are wrapped in double quotes as-is. Quote characters inside a value
//! are not escaped, so such a value yields a document YAML parsers reject.

use crate::types::ArticleRecord;

pub const START_MARKER: &str = "---";
pub const END_MARKER: &str = "...";

/// Renders `record` as a front matter block. Keys are always emitted in the
/// order title, author, publish_date, tags, summary; empty fields are skipped.
pub fn serialize(record: &ArticleRecord) -> String {
    let mut lines = vec![START_MARKER.to_string()];

    push_scalar(&mut lines, "title", record.title.as_deref());
    push_scalar(&mut lines, "author", record.author.as_deref());
    push_scalar(&mut lines, "publish_date", record.publish_date.as_deref());

    if !record.tags.is_empty() {
        lines.push("tags:".to_string());
        lines.extend(record.tags.iter().map(|tag| format!("  - {}", tag)));
    }

    push_scalar(&mut lines, "summary", record.summary.as_deref());

    lines.push(END_MARKER.to_string());
    lines.join("\n")
}

fn push_scalar(lines: &mut Vec<String>, key: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => lines.push(format!("{}: \"{}\"", key, value)),
        _ => {}
    }
}
