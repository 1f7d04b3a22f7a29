use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory, relative to the working directory, that receives reports by default.
pub const DEFAULT_OUTPUT_DIR: &str = "project_exports";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}
impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}
impl ExportBuilder {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                source: source.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }
    pub fn build(self) -> ExportOptions {
        self.options
    }
}
