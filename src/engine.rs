use crate::error::ExportError;
use crate::options::ExportOptions;
use crate::output;
use crate::types::{ExportMetadata, ExportSummary, FileContent, FileRecord, Report};
use chrono::{DateTime, Local};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const SNIFF_LEN: u64 = 1024;

struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false);
        Self {
            root: root.to_path_buf(),
            inner: builder.build(),
        }
    }
    /// Yields regular files below the root.
    ///
    /// Only a failure to read the root itself is an error. Unreadable entries
    /// further down are skipped and the walk carries on.
    fn files(self) -> impl Iterator<Item = Result<PathBuf, ExportError>> {
        let root = self.root;
        self.inner.filter_map(move |result| match result {
            Ok(entry) => {
                let path = entry.into_path();
                path.is_file().then_some(Ok(path))
            }
            Err(e) if e.depth().is_some_and(|depth| depth > 0) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
            Err(e) => Some(Err(ExportError::Walk {
                path: root.clone(),
                message: e.to_string(),
            })),
        })
    }
}

/// Returns true when the file name starts with `.`.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Returns true when a NUL byte appears in the first 1024 bytes.
///
/// Any I/O failure answers `false`; the content read reports the real problem.
pub fn is_binary(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    match BufReader::new(file).take(SNIFF_LEN).read_to_end(&mut head) {
        Ok(_) => head.contains(&0),
        Err(_) => false,
    }
}

fn read_file_content(path: &Path) -> FileContent {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(normalize_newlines(text)),
            Err(_) => FileContent::Binary,
        },
        Err(e) => FileContent::Error(e.to_string()),
    }
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn system_time(time: std::io::Result<std::time::SystemTime>) -> Option<String> {
    time.ok()
        .map(|t| output::iso_timestamp(&DateTime::<Local>::from(t)))
}

fn file_record(root: &Path, path: PathBuf) -> Result<FileRecord, ExportError> {
    let metadata = fs::metadata(&path).map_err(|e| ExportError::io(&path, e))?;
    let modified = system_time(metadata.modified()).unwrap_or_default();
    let created = system_time(metadata.created()).unwrap_or_else(|| modified.clone());
    let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
    let content = read_file_content(&path);
    Ok(FileRecord {
        relative_path,
        path,
        size: metadata.len(),
        created,
        modified,
        content,
    })
}

/// Walks `options.source` and assembles the full report in memory.
///
/// Fails if the source cannot be resolved, is not a directory, or cannot be
/// read. Unreadable subdirectories are skipped and unreadable file contents
/// become inline markers instead.
pub fn build_report(options: &ExportOptions) -> Result<Report, ExportError> {
    let started_at = Local::now();
    let root = fs::canonicalize(&options.source).map_err(|e| ExportError::io(&options.source, e))?;
    if !root.is_dir() {
        return Err(ExportError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting export of {}", root.display());

    let mut metadata = ExportMetadata {
        export_timestamp: output::iso_timestamp(&started_at),
        source_folder: root.display().to_string(),
        total_files: 0,
        total_size: 0,
    };
    let mut file_blocks = Vec::new();
    for path in Walker::new(&root).files() {
        let path = path?;
        if is_hidden(&path) || is_binary(&path) {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping {}", path.display());
            continue;
        }
        let record = file_record(&root, path)?;
        metadata.total_files += 1;
        metadata.total_size += record.size;
        file_blocks.extend(output::file_segments(&record));
    }
    Ok(output::assemble(metadata, started_at, file_blocks))
}

/// Builds the report for `options.source` and writes it under `options.output_dir`.
pub fn export(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    let report = build_report(options)?;
    output::write_report(&report, &options.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn hidden_is_decided_by_file_name_only() {
        assert!(is_hidden(Path::new("a/.env")));
        assert!(!is_hidden(Path::new(".git/config")));
        assert!(!is_hidden(Path::new("src/main.rs")));
    }

    #[test]
    fn nul_after_first_kilobyte_is_not_binary() {
        let dir = tempdir().unwrap();
        let late = dir.path().join("late.dat");
        let mut bytes = vec![b'a'; 1024];
        bytes.push(0);
        fs::write(&late, bytes).unwrap();
        assert!(!is_binary(&late));

        let early = dir.path().join("early.dat");
        fs::write(&early, b"ab\0cd").unwrap();
        assert!(is_binary(&early));
    }

    #[test]
    fn missing_file_is_not_binary() {
        assert!(!is_binary(Path::new("/definitely/not/here")));
    }

    #[test]
    fn carriage_returns_become_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n".into()), "a\nb\nc\n");
    }

    #[test]
    fn invalid_utf8_reads_as_binary() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("latin1.txt");
        fs::write(&file, [b'c', b'a', b'f', 0xE9]).unwrap();
        assert_eq!(read_file_content(&file), FileContent::Binary);
    }

    #[test]
    fn unreadable_path_reads_as_error() {
        let dir = tempdir().unwrap();
        match read_file_content(dir.path()) {
            FileContent::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected error marker, got {:?}", other),
        }
    }
}
