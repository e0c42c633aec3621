/// Candidate discovery — `jwalk`-based parallel directory traversal.
///
/// The walk only collects `(name, extension, path)` tuples; no file
/// content is touched here. Sorted traversal keeps the discovered order
/// deterministic, which later fixes both the record order and the
/// sibling-resolution tie-break.
use crate::scanner::progress::ClassifyProgress;
use compact_str::CompactString;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// One file discovered by the walk, before classification.
#[derive(Debug, Clone)]
pub(crate) struct FileCandidate {
    /// File name including extension.
    pub name: CompactString,
    /// Lowercased extension without the leading dot; empty when absent.
    pub extension: CompactString,
    pub path: PathBuf,
}

/// Walk `root` and collect every regular file as a candidate.
///
/// Traversal errors (typically access-denied directories) are reported
/// on the progress channel and counted, never fatal. Returns `None` when
/// cancellation was requested mid-walk; otherwise the candidates plus
/// the traversal error count.
pub(crate) fn collect_candidates(
    root: &Path,
    progress_tx: &Sender<ClassifyProgress>,
    cancel_flag: &AtomicBool,
) -> Option<(Vec<FileCandidate>, u64)> {
    let mut candidates = Vec::new();
    let mut error_count: u64 = 0;
    let mut update_counter: u64 = 0;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        // Check cancellation every 1000 entries.
        update_counter += 1;
        if update_counter.is_multiple_of(1_000) && cancel_flag.load(Ordering::Relaxed) {
            return None;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                error_count += 1;
                let err_path = err
                    .path()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_default();
                let _ = progress_tx.send(ClassifyProgress::Error {
                    path: err_path,
                    message: format!("{err}"),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        candidates.push(FileCandidate {
            name: CompactString::new(name.as_ref()),
            extension: CompactString::new(&extension),
            path,
        });
    }

    Some((candidates, error_count))
}
