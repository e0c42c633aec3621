/// The `scan` command — run a classification and render the results.
use crate::{export, render};
use anyhow::Result;
use docsleuth_core::catalog::RuleCatalog;
use docsleuth_core::classify::ClassifyOptions;
use docsleuth_core::content::ExcelLoader;
use docsleuth_core::model::ClassificationRecord;
use docsleuth_core::scanner::progress::ClassifyProgress;
use docsleuth_core::scanner::start_classification;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

pub fn run(
    path: &Path,
    catalog: RuleCatalog,
    options: ClassifyOptions,
    recognised_only: bool,
    csv: Option<PathBuf>,
) -> Result<()> {
    let handle = start_classification(
        path.to_path_buf(),
        catalog,
        options,
        Arc::new(ExcelLoader),
    );

    // Blocking drain: the run lives on its own thread, progress arrives
    // here. Errors are logged as they happen; counters overwrite one
    // status line.
    let mut files_total: u64 = 0;
    loop {
        match handle.progress_rx.recv() {
            Ok(ClassifyProgress::Discovered { files_total: n }) => {
                files_total = n;
                eprintln!("Discovered {n} files");
            }
            Ok(ClassifyProgress::Update {
                files_processed,
                files_matched,
                ..
            }) => {
                eprint!("\rClassifying {files_processed}/{files_total} ({files_matched} matched)");
            }
            Ok(ClassifyProgress::Error { path, message }) => {
                warn!("{path}: {message}");
            }
            Ok(ClassifyProgress::Complete {
                duration,
                files_matched,
                error_count,
                ..
            }) => {
                eprintln!(
                    "\rClassified {files_total} files in {duration:.1?} — {files_matched} matched, {error_count} errors"
                );
                break;
            }
            Ok(ClassifyProgress::Cancelled) => {
                eprintln!("\rCancelled");
                break;
            }
            Err(_) => break,
        }
    }

    let records = handle.live_results.read();
    if records.is_empty() {
        println!("No files found.");
        return Ok(());
    }

    let selected: Vec<&ClassificationRecord> = records
        .iter()
        .filter(|r| !recognised_only || r.is_recognised())
        .collect();

    println!("{}", render::results_table(&selected));

    let recognised = records.iter().filter(|r| r.is_recognised()).count();
    println!("{recognised} of {} files recognised", records.len());

    if let Some(csv_path) = csv {
        let csv_path = if csv_path.as_os_str().is_empty() {
            export::default_export_name(chrono::Local::now().date_naive())
        } else {
            csv_path
        };
        export::write_csv(&csv_path, &selected)?;
        println!("Results written to {}", csv_path.display());
    }

    Ok(())
}
