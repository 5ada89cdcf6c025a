// src/progress.rs
use crate::error::Error;
use crate::model::MediaKind;
use crate::runner::KindReport;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users; logging goes through
/// `tracing` regardless.
pub trait Progress {
    /// Called at the start with the number of kinds to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One media kind was reconciled and written.
    fn kind_done(&mut self, _kind: MediaKind, _report: &KindReport) {}

    /// One media kind aborted; the run moves on to the next.
    fn kind_failed(&mut self, _kind: MediaKind, _error: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
