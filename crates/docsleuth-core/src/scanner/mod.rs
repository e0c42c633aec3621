/// Scanner module — orchestrates background classification runs.
///
/// A run walks the target directory, classifies every discovered file
/// against the rule catalog, synthesizes canonical estimate names, and
/// finally reconciles same-stem siblings. Per-file work is an
/// embarrassingly parallel rayon map; the reconciliation pass is
/// single-threaded because it has cross-record dependencies.
///
/// Records are written into a shared **`LiveResults`** vector
/// (`Arc<RwLock<Vec<ClassificationRecord>>>`) so a frontend can render
/// partial results while the run is still going.
pub mod progress;
mod walk;

use crate::catalog::RuleCatalog;
use crate::classify::{classify, ClassifyOptions, MatchOrigin};
use crate::content::{sample_rows, FileContent, RowLimit, TableLoader};
use crate::model::{is_spreadsheet_ext, ClassificationRecord};
use crate::naming::{self, EstimateKind, NUMBER_SCAN_ROWS};
use crate::resolve;
use progress::ClassifyProgress;
use walk::FileCandidate;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::RwLock;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Shared, concurrently-readable classification results.
///
/// Worker threads hold the write lock briefly to publish one finished
/// record. A frontend holds the read lock to render the table so far.
pub type LiveResults = Arc<RwLock<Vec<ClassificationRecord>>>;

/// Maximum number of progress messages that may queue up in the channel.
///
/// A frontend drains this channel between redraws. A burst of 4 096
/// messages gives the classifier ample headroom; if the frontend falls
/// behind, `send` blocks and the run stalls briefly rather than
/// consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed classification run. Allows
/// cancellation and receiving progress updates.
pub struct ClassifyHandle {
    /// Receiver for progress updates from the classification thread.
    pub progress_rx: Receiver<ClassifyProgress>,
    /// Shared records, populated incrementally during the run.
    pub live_results: LiveResults,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the classification thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ClassifyHandle {
    /// Request the run to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Start a classification run on a background thread.
///
/// The catalog is an owned snapshot: tag edits made while a run is in
/// flight apply to the next run, never to this one.
pub fn start_classification(
    root: PathBuf,
    catalog: RuleCatalog,
    options: ClassifyOptions,
    loader: Arc<dyn TableLoader>,
) -> ClassifyHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ClassifyProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let live_results: LiveResults = Arc::new(RwLock::new(Vec::new()));
    let results_clone = live_results.clone();

    let thread = thread::Builder::new()
        .name("docsleuth-classifier".into())
        .spawn(move || {
            run(
                root,
                catalog,
                options,
                loader,
                progress_tx,
                cancel_clone,
                results_clone,
            );
        })
        .expect("failed to spawn classifier thread");

    ClassifyHandle {
        progress_rx,
        live_results,
        cancel_flag,
        _thread: Some(thread),
    }
}

fn run(
    root: PathBuf,
    catalog: RuleCatalog,
    options: ClassifyOptions,
    loader: Arc<dyn TableLoader>,
    progress_tx: Sender<ClassifyProgress>,
    cancel_flag: Arc<AtomicBool>,
    live_results: LiveResults,
) {
    let start = Instant::now();
    info!("Starting classification of {}", root.display());

    let Some((candidates, walk_errors)) =
        walk::collect_candidates(&root, &progress_tx, &cancel_flag)
    else {
        let _ = progress_tx.send(ClassifyProgress::Cancelled);
        return;
    };

    let files_total = candidates.len() as u64;
    let _ = progress_tx.send(ClassifyProgress::Discovered { files_total });

    // Publish placeholder records immediately so frontends can show the
    // full file list before any workbook is opened.
    {
        let mut live = live_results.write();
        *live = candidates
            .iter()
            .map(|c| {
                ClassificationRecord::unmatched(c.name.clone(), c.extension.clone(), c.path.clone())
            })
            .collect();
    }

    let processed = AtomicU64::new(0);
    let matched = AtomicU64::new(0);
    let error_count = AtomicU64::new(walk_errors);

    candidates
        .par_iter()
        .enumerate()
        .for_each(|(index, candidate)| {
            if cancel_flag.load(Ordering::Relaxed) {
                return;
            }

            let (record, load_error) =
                classify_candidate(candidate, &catalog, options, loader.as_ref());

            if let Some(message) = load_error {
                error_count.fetch_add(1, Ordering::Relaxed);
                let _ = progress_tx.send(ClassifyProgress::Error {
                    path: candidate.path.to_string_lossy().into_owned(),
                    message,
                });
            }

            let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if record.is_recognised() {
                matched.fetch_add(1, Ordering::Relaxed);
            }

            {
                let mut live = live_results.write();
                live[index] = record;
            }

            let _ = progress_tx.send(ClassifyProgress::Update {
                files_processed: done,
                files_matched: matched.load(Ordering::Relaxed),
                current_path: candidate.path.to_string_lossy().into_owned(),
            });
        });

    if cancel_flag.load(Ordering::Relaxed) {
        let _ = progress_tx.send(ClassifyProgress::Cancelled);
        return;
    }

    // Sibling reconciliation has cross-record dependencies; it runs
    // strictly after every per-file record exists, single-threaded.
    {
        let mut live = live_results.write();
        resolve::propagate_to_siblings(&mut live);
    }

    let duration = start.elapsed();
    let files_matched = matched.load(Ordering::Relaxed);
    debug!("Classification complete: {files_matched}/{files_total} matched in {duration:?}");

    let _ = progress_tx.send(ClassifyProgress::Complete {
        duration,
        files_total,
        files_matched,
        error_count: error_count.load(Ordering::Relaxed),
    });
}

/// Classify one candidate: two-phase match, then name synthesis for
/// estimate spreadsheets. Returns the finished record plus the workbook
/// load error, if reading was attempted and failed.
fn classify_candidate(
    candidate: &FileCandidate,
    catalog: &RuleCatalog,
    options: ClassifyOptions,
    loader: &dyn TableLoader,
) -> (ClassificationRecord, Option<String>) {
    let mut record = ClassificationRecord::unmatched(
        candidate.name.clone(),
        candidate.extension.clone(),
        candidate.path.clone(),
    );

    let content = FileContent::new(loader, &candidate.path, &candidate.name);

    if let Some(found) = classify(
        catalog,
        &candidate.name,
        &candidate.extension,
        &content,
        options,
    ) {
        record.matched_type = Some(found.rule.id.clone());
        record.type_name = Some(found.rule.display_name.clone());
        record.mask = Some(found.rule.mask.clone());
        if let MatchOrigin::Content { row } = &found.origin {
            debug!(
                "{} matched rule {} on row {row:?}",
                candidate.path.display(),
                found.rule.id
            );
        }

        if is_spreadsheet_ext(&candidate.extension) {
            if let Some(kind) = EstimateKind::from_type_name(&found.rule.display_name) {
                let rows = content
                    .table()
                    .map(|t| sample_rows(t, RowLimit::First(NUMBER_SCAN_ROWS)))
                    .unwrap_or_default();
                record.canonical_base_name =
                    Some(naming::synthesize(kind, &rows, &candidate.name));
            }
        }
    }

    let load_error = content.load_error().map(|err| err.to_string());
    (record, load_error)
}
