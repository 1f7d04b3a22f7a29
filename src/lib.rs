//! # Project Export
//!
//! `project_export` walks a source directory, skips hidden and binary files, and
//! concatenates everything else into one timestamped text report. The report
//! opens with aggregate metadata (timestamp, source path, file count, total size)
//! followed by a block per file with its path, size, timestamps and contents.
//!
//! The whole report is assembled in memory and written once, so a failed export
//! never leaves a partial file behind.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use project_export::{ExportBuilder, export};
//!
//! let options = ExportBuilder::new("./src")
//!     .output_dir("project_exports")
//!     .build();
//!
//! let summary = export(&options).expect("Failed to export directory");
//! println!(
//!     "Successfully exported {} files to {}",
//!     summary.metadata.total_files,
//!     summary.output_path.display()
//! );
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{build_report, export, is_binary, is_hidden};
pub use error::ExportError;
pub use options::{DEFAULT_OUTPUT_DIR, ExportBuilder, ExportOptions};
pub use types::{ExportMetadata, ExportSummary, FileContent, FileRecord, Report};
