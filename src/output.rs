//! Report rendering and writing.
//!
//! A report is a list of text segments: the metadata block, a section banner,
//! then one block per included file in traversal order. Segments are joined
//! with `\n` and written to disk in a single write.

use crate::types::{ExportMetadata, FileContent, FileRecord, Report};
use crate::{ExportError, ExportSummary};
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const KEY_WIDTH: usize = 20;

pub const BINARY_MARKER: &str = "[Binary content omitted]";

/// Formats a local timestamp as ISO-8601.
///
/// Microseconds are printed with six digits, and left out entirely when zero.
pub fn iso_timestamp(time: &DateTime<Local>) -> String {
    if time.timestamp_subsec_micros() == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// File name for a report started at `time`.
pub fn report_file_name(time: &DateTime<Local>) -> String {
    format!("project_export_{}.txt", time.format("%Y%m%d_%H%M%S"))
}

pub fn metadata_segments(metadata: &ExportMetadata) -> Vec<String> {
    vec![
        "=== PROJECT METADATA ===".to_string(),
        format_field("export_timestamp", &metadata.export_timestamp),
        format_field("source_folder", &metadata.source_folder),
        format_field("total_files", &metadata.total_files),
        format_field("total_size", &metadata.total_size),
        "\n\n=== FILE CONTENTS ===".to_string(),
    ]
}

pub fn file_segments(record: &FileRecord) -> Vec<String> {
    let mut out = vec![
        format!("\n\n=== FILE: {} ===", record.relative_path.display()),
        format!("• Path: {}", record.path.display()),
        format!("• Size: {} bytes", record.size),
        format!("• Created: {}", record.created),
        format!("• Modified: {}", record.modified),
    ];
    match &record.content {
        FileContent::Text(text) => {
            out.push("\n```".to_string());
            out.push(text.clone());
            out.push("```".to_string());
        }
        FileContent::Binary => out.push(format!("\n{}", BINARY_MARKER)),
        FileContent::Error(message) => out.push(format!("\n[Error reading file: {}]", message)),
    }
    out
}

/// Puts the metadata block in front of the already flattened file blocks.
pub fn assemble(
    metadata: ExportMetadata,
    started_at: DateTime<Local>,
    file_blocks: Vec<String>,
) -> Report {
    let mut segments = metadata_segments(&metadata);
    segments.extend(file_blocks);
    Report {
        metadata,
        started_at,
        segments,
    }
}

/// Writes the report under `output_dir`, creating the directory if needed.
///
/// The file is named after the export start time. When a report with that
/// name already exists a numeric suffix is appended, so repeated exports
/// within the same second never overwrite each other.
pub fn write_report(
    report: &Report,
    output_dir: impl AsRef<Path>,
) -> Result<ExportSummary, ExportError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;
    let (path, mut file) = create_unique(output_dir, &report.started_at)?;
    file.write_all(report.render().as_bytes())
        .map_err(|e| ExportError::io(&path, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Report written to {}", path.display());
    Ok(ExportSummary {
        metadata: report.metadata.clone(),
        output_path: path,
    })
}

fn create_unique(
    dir: &Path,
    started_at: &DateTime<Local>,
) -> Result<(PathBuf, fs::File), ExportError> {
    let base = report_file_name(started_at);
    let stem = base.trim_end_matches(".txt");
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            base.clone()
        } else {
            format!("{}_{}.txt", stem, attempt)
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(ExportError::io(path, e)),
        }
    }
}

fn format_field(key: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$}: {}", key, value, width = KEY_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(content: FileContent) -> FileRecord {
        FileRecord {
            relative_path: PathBuf::from("src/a.rs"),
            path: PathBuf::from("/tmp/proj/src/a.rs"),
            size: 5,
            created: "2026-01-02T03:04:05.000000".into(),
            modified: "2026-01-02T03:04:06.000000".into(),
            content,
        }
    }

    #[test]
    fn metadata_keys_are_padded_to_twenty_columns() {
        let meta = ExportMetadata {
            export_timestamp: "t".into(),
            source_folder: "/src".into(),
            total_files: 3,
            total_size: 42,
        };
        let lines = metadata_segments(&meta);
        assert_eq!(lines[1], "export_timestamp    : t");
        assert_eq!(lines[2], "source_folder       : /src");
        assert_eq!(lines[3], "total_files         : 3");
        assert_eq!(lines[4], "total_size          : 42");
    }

    #[test]
    fn text_content_is_fenced() {
        let out = file_segments(&record(FileContent::Text("hello".into()))).join("\n");
        assert!(out.contains("=== FILE: src/a.rs ==="));
        assert!(out.contains("• Size: 5 bytes"));
        assert!(out.ends_with("\n```\nhello\n```"));
    }

    #[test]
    fn binary_and_error_markers() {
        let bin = file_segments(&record(FileContent::Binary));
        assert_eq!(bin.last().unwrap(), "\n[Binary content omitted]");
        let err = file_segments(&record(FileContent::Error("denied".into())));
        assert_eq!(err.last().unwrap(), "\n[Error reading file: denied]");
    }

    #[test]
    fn file_name_uses_compact_timestamp() {
        let t = Local.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap();
        assert_eq!(report_file_name(&t), "project_export_20261018_090507.txt");
    }

    #[test]
    fn iso_timestamp_drops_zero_fraction() {
        let t = Local.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap();
        assert_eq!(iso_timestamp(&t), "2026-10-18T09:05:07");
        let later = t + chrono::Duration::microseconds(250);
        assert_eq!(iso_timestamp(&later), "2026-10-18T09:05:07.000250");
    }
}
