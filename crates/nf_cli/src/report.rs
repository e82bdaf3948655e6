//! Console report and output file for one run.

use nf_core::{ArticleRecord, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const BANNER: &str = "YAML Tag Generator for note.com";
pub const MISSING: &str = "取得できませんでした";
const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Human-readable field listing, one `label: value` line per field.
pub fn summary_lines(record: &ArticleRecord) -> Vec<String> {
    let tags = if record.tags.is_empty() {
        MISSING.to_string()
    } else {
        record.tags.join(", ")
    };

    vec![
        format!("タイトル: {}", or_missing(record.title.as_deref())),
        format!("著者: {}", or_missing(record.author.as_deref())),
        format!("公開日: {}", or_missing(record.publish_date.as_deref())),
        format!("タグ: {}", tags),
        format!("概要: {}", preview(record.summary.as_deref())),
    ]
}

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => MISSING,
    }
}

/// First 100 characters of the summary followed by an ellipsis.
fn preview(summary: Option<&str>) -> String {
    match summary {
        Some(text) if !text.is_empty() => {
            let head: String = text.chars().take(SUMMARY_PREVIEW_CHARS).collect();
            format!("{}...", head)
        }
        _ => MISSING.to_string(),
    }
}

pub fn output_file_name(timestamp: u64) -> String {
    format!("output_{}.yaml", timestamp)
}

/// Writes `document` to `dir/output_<timestamp>.yaml`, replacing any file
/// already at that path.
pub fn write_document(dir: &Path, timestamp: u64, document: &str) -> Result<PathBuf> {
    let path = dir.join(output_file_name(timestamp));
    fs::write(&path, document)?;
    Ok(path)
}
