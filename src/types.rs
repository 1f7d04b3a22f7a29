use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Aggregate figures written at the top of every report.
///
/// `total_files` and `total_size` cover exactly the files that passed the
/// hidden/binary filter, including those whose content later failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Local time the export started, ISO-8601.
    pub export_timestamp: String,
    /// Canonical absolute path of the exported directory.
    pub source_folder: String,
    pub total_files: u64,
    /// Sum of on-disk sizes in bytes.
    pub total_size: u64,
}

/// What was emitted for a file's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded UTF-8 text with newlines normalised to `\n`.
    Text(String),
    /// The file did not decode as UTF-8.
    Binary,
    /// Reading failed; holds the error description.
    Error(String),
}

/// A single included file, flattened into report segments right after it is built.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the export root.
    pub relative_path: PathBuf,
    /// Absolute path.
    pub path: PathBuf,
    pub size: u64,
    pub created: String,
    pub modified: String,
    pub content: FileContent,
}

/// A fully assembled report held in memory until it is written.
#[derive(Debug, Clone)]
pub struct Report {
    pub metadata: ExportMetadata,
    /// Export start time, used to name the output file.
    pub started_at: DateTime<Local>,
    /// Ordered text segments, joined with `\n` on render.
    pub segments: Vec<String>,
}

impl Report {
    pub fn render(&self) -> String {
        self.segments.join("\n")
    }
}

/// The result of a successful export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub metadata: ExportMetadata,
    pub output_path: PathBuf,
}
