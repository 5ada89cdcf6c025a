// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::config::consts::{
    BASE_URL, DEFAULT_DATA_DIR, DEFAULT_SNAPSHOT_DIR, LOG_FILE, TIMEOUT_SECS, TIMESTAMP_FILE,
};
use crate::config::options::{KindSelector, RunOptions, SourceMode};
use crate::error::Error;
use crate::model::MediaKind;
use crate::progress::Progress;
use crate::runner::{self, KindReport, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    All,
    Movies,
    Shows,
}

impl From<KindArg> for KindSelector {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::All => KindSelector::All,
            KindArg::Movies => KindSelector::One(MediaKind::Movies),
            KindArg::Shows => KindSelector::One(MediaKind::Shows),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "anitrakt_db")]
#[command(about = "Build Trakt ↔ MyAnimeList mapping files from the AniTrakt index")]
#[command(version)]
pub struct Args {
    /// Directory holding ignore_*/overwrite_* inputs and the output JSON
    #[arg(long, short = 'd', env = "ANITRAKT_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Which media kind(s) to process
    #[arg(long, short = 'k', value_enum, default_value_t = KindArg::All)]
    pub kind: KindArg,

    /// Source URL template; `{kind}` becomes `movies` or `shows`
    #[arg(long, env = "ANITRAKT_URL", default_value = BASE_URL)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, env = "ANITRAKT_TIMEOUT", default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Read `<DIR>/<kind>.html` snapshots instead of fetching
    #[arg(long, value_name = "DIR", env = "ANITRAKT_OFFLINE")]
    pub offline: Option<PathBuf>,

    /// Where fetched pages are saved (minified)
    #[arg(long, env = "ANITRAKT_SNAPSHOT_DIR", default_value = DEFAULT_SNAPSHOT_DIR)]
    pub snapshot_dir: PathBuf,

    /// Do not save fetched pages
    #[arg(long)]
    pub no_snapshot: bool,

    /// File receiving the completion timestamp
    #[arg(long, env = "ANITRAKT_TIMESTAMP_FILE", default_value = TIMESTAMP_FILE)]
    pub timestamp_file: PathBuf,

    /// Do not write the completion timestamp
    #[arg(long)]
    pub no_timestamp: bool,

    /// Also log to a file (no colours); bare flag uses the default path
    #[arg(long, env = "ANITRAKT_LOG_FILE", num_args = 0..=1, default_missing_value = LOG_FILE)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        let source = match &self.offline {
            Some(dir) => SourceMode::Snapshot(dir.clone()),
            None => SourceMode::Remote {
                url_template: self.url.clone(),
                timeout: Duration::from_secs(self.timeout),
            },
        };
        RunOptions {
            kinds: self.kind.into(),
            source,
            data_dir: self.data_dir.clone(),
            snapshot_dir: (!self.no_snapshot).then(|| self.snapshot_dir.clone()),
            timestamp_path: (!self.no_timestamp).then(|| self.timestamp_file.clone()),
        }
    }
}

/// Prints one line per finished kind to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn kind_done(&mut self, kind: MediaKind, r: &KindReport) {
        println!(
            "{kind}: {} extracted, {} skipped, {} written -> {}",
            r.extracted, r.skipped_rows, r.written, r.path.display()
        );
    }

    fn kind_failed(&mut self, kind: MediaKind, error: &Error) {
        println!("{kind}: FAILED ({error})");
    }
}

/// Parse args, run, print the summary. `Ok(false)` means partial failure.
pub fn run() -> color_eyre::Result<bool> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref());

    let opts = args.to_options();
    let source = opts.source.build().wrap_err("could not set up the page source")?;
    let summary = runner::run(&opts, source.as_ref(), Some(&mut ConsoleProgress))
        .wrap_err_with(|| format!("could not prepare data directory {}", opts.data_dir.display()))?;

    report(&summary);
    Ok(summary.is_success())
}

fn report(summary: &RunSummary) {
    if let Some(path) = &summary.timestamp {
        println!("Timestamp updated: {}", path.display());
    }
    if let Some(e) = &summary.timestamp_error {
        println!("Timestamp not written: {e}");
    }
    if !summary.is_success() {
        let failed: Vec<_> = summary.failures.iter().map(|(k, _)| k.as_str()).collect();
        if failed.is_empty() {
            println!("Partial success");
        } else {
            println!("Partial success; failed: {}", failed.join(", "));
        }
    }
}
