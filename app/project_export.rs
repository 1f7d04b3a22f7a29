//! Command-line interface for project_export.
//!
//! Exports a source directory into a single timestamped text report.
//! Without a SOURCE argument the path is read interactively from stdin.

use clap::Parser;
use project_export::{DEFAULT_OUTPUT_DIR, ExportBuilder, ExportSummary, export};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

/// project_export — snapshot a directory into one text report
#[derive(Parser)]
#[command(name = "project_export", version, about, long_about = None)]
struct Cli {
    /// Source directory (prompted for when omitted)
    source: Option<PathBuf>,

    /// Directory that receives the report
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the export summary as JSON
    #[arg(long)]
    json: bool,
}

/// Asks for the source folder on stdout and reads one line from stdin.
fn prompt_source() -> io::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter path to your src folder: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn main() {
    let cli = Cli::parse();
    let source = match cli.source {
        Some(source) => source,
        None => prompt_source().unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            exit(1);
        }),
    };
    let options = ExportBuilder::new(source)
        .output_dir(cli.output_dir)
        .build();

    match export(&options) {
        Ok(summary) => print_summary(&summary, cli.json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_summary(summary: &ExportSummary, json: bool) {
    if json {
        let out = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", out);
    } else {
        println!(
            "Successfully exported {} files to {}",
            summary.metadata.total_files,
            summary.output_path.display()
        );
    }
}
