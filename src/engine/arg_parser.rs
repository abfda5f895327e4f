use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::{DEFAULT_MAX_RUN_TIME_SECS, DEFAULT_WORKERS};

struct DefaultArgs;

impl DefaultArgs {
    pub const FILE_PATH: &'static str = "title.basics.tsv";
    pub const TITLE_TYPE: &'static str = "movie";
    pub const PRIMARY_TITLE: &'static str = "The Mask";
}

/// Concurrent filtered scanner for the IMDb title.basics TSV dataset.
#[derive(Clone, Parser)]
#[command(name = "titlescan")]
#[command(about = "Scan title.basics.tsv for titles matching the given filters.")]
pub struct Cli {
    /// Path to the inflated `title.basics.tsv.gz` file.
    #[arg(long, short, value_name = "FILE", default_value = DefaultArgs::FILE_PATH)]
    pub file_path: PathBuf,

    /// Filter on the `titleType` column. Pass an empty string to disable.
    #[arg(long, default_value = DefaultArgs::TITLE_TYPE)]
    pub title_type: String,

    /// Filter on the `primaryTitle` column. Pass an empty string to disable.
    #[arg(long, default_value = DefaultArgs::PRIMARY_TITLE)]
    pub primary_title: String,

    /// Filter on the `originalTitle` column.
    #[arg(long)]
    pub original_title: Option<String>,

    /// Keep only titles whose genre list contains this genre.
    #[arg(long)]
    pub genre: Option<String>,

    /// Keep only titles whose genre list equals this comma-separated list (as a set).
    #[arg(long, value_delimiter = ',')]
    pub genres: Vec<String>,

    /// Filter on the `startYear` column.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Filter on the `endYear` column.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Filter on the `runtimeMinutes` column.
    #[arg(long)]
    pub runtime_minutes: Option<i32>,

    /// Number of workers used to scan the input file.
    #[arg(long, short = 'w', default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Maximum run time in seconds; the scan stops with a deadline error when it elapses.
    #[arg(long, default_value_t = DEFAULT_MAX_RUN_TIME_SECS)]
    pub max_run_time_secs: u64,

    /// OMDb API key. When set, each matching title is enriched via the lookup API.
    #[arg(long, short = 'k')]
    pub api_key: Option<String>,

    /// Maximum number of lookup requests to send.
    #[arg(long)]
    pub max_requests: Option<usize>,

    /// Regex applied to the looked-up plot; titles whose plot does not match are not printed.
    #[arg(long)]
    pub plot_filter: Option<String>,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
