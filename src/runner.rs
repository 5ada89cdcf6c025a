// src/runner.rs
//
// One run: for each selected kind, load curation, fetch, snapshot, extract,
// reconcile, write. A failing kind is reported and the next one still runs;
// the timestamp is only touched when every kind succeeded.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info};

use crate::{
    config::options::RunOptions,
    core::Source,
    error::{Error, Result},
    model::{MediaKind, Movie, Record, Show},
    progress::Progress,
    reconcile::reconcile,
    specs::Extract,
    store::{self, DataDir},
};

/// What one successful kind produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindReport {
    pub kind: MediaKind,
    /// Records extracted from the page, before curation.
    pub extracted: usize,
    /// Rows or season fragments dropped by the extractor.
    pub skipped_rows: usize,
    /// Records in the output file.
    pub written: usize,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<KindReport>,
    pub failures: Vec<(MediaKind, Error)>,
    /// Set when the timestamp file was written.
    pub timestamp: Option<PathBuf>,
    pub timestamp_error: Option<Error>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool { self.failures.is_empty() && self.timestamp_error.is_none() }
}

/// Top-level runner.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// Returns `Err` only when the data directory itself cannot be prepared;
/// per-kind failures land in [`RunSummary::failures`].
pub fn run(
    opts: &RunOptions,
    source: &dyn Source,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let data = DataDir::open(&opts.data_dir)?;
    let kinds = opts.kinds.kinds();
    let started = Instant::now();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(kinds.len());
    }

    let mut summary = RunSummary::default();
    for kind in kinds {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing {kind} from {}", source.location(kind)));
        }
        match process_kind(kind, opts, source, &data) {
            Ok(report) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.kind_done(kind, &report);
                }
                summary.reports.push(report);
            }
            Err(e) => {
                error!("Failed to process {kind}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.kind_failed(kind, &e);
                }
                summary.failures.push((kind, e));
            }
        }
    }

    if summary.is_success() {
        if let Some(path) = &opts.timestamp_path {
            match store::write_timestamp(path) {
                Ok(_) => summary.timestamp = Some(path.clone()),
                Err(e) => {
                    error!("Failed to write timestamp: {e}");
                    summary.timestamp_error = Some(e);
                }
            }
        }
    }

    info!("Run finished in {:.2?}", started.elapsed());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

fn process_kind(kind: MediaKind, opts: &RunOptions, source: &dyn Source, data: &DataDir) -> Result<KindReport> {
    match kind {
        MediaKind::Movies => process::<Movie>(kind, opts, source, data),
        MediaKind::Shows => process::<Show>(kind, opts, source, data),
    }
}

fn process<R: Record + Extract>(
    kind: MediaKind,
    opts: &RunOptions,
    source: &dyn Source,
    data: &DataDir,
) -> Result<KindReport> {
    let started = Instant::now();

    // curation before fetch
    let rules = data.load_ignore_rules(kind)?;
    let overrides = data.load_overwrites::<R>(kind)?;

    let html = source.fetch(kind)?;
    if source.is_remote() {
        if let Some(dir) = &opts.snapshot_dir {
            store::write_snapshot(dir, kind, &html)?;
        }
    }

    let extracted = R::extract(&html)?;
    let scraped = extracted.records.len();
    let skipped = extracted.failures.len();
    if skipped > 0 {
        info!("Skipped {skipped} malformed {kind} rows");
    }

    let records = reconcile(extracted.records, &rules, &overrides);
    let path = data.save_records(kind, &records)?;

    info!("Processed {kind} in {:.2?}", started.elapsed());
    Ok(KindReport { kind, extracted: scraped, skipped_rows: skipped, written: records.len(), path })
}
