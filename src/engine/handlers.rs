//! Run handler: wire CLI flags into a scan plus optional lookup enrichment.

use anyhow::{Context, Result};
use regex::Regex;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::dataset::Dataset;
use crate::engine::Cli;
use crate::filters::{
    EndYearFilter, FilterChain, GenreFilter, GenresFilter, OriginalTitleFilter,
    PrimaryTitleFilter, RuntimeMinutesFilter, StartYearFilter, TitleTypeFilter,
};
use crate::lookup::LookupClient;
use crate::scan::scan_titles;
use crate::types::{ScanOptions, Title};
use crate::utils::setup_logging;

/// Handle one CLI invocation end to end: scan, then print (enriched when an
/// API key is configured). Cancellation and an elapsed deadline are graceful
/// stops, not failures.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);

    let cancel = CancelToken::with_deadline(Duration::from_secs(cli.max_run_time_secs));
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel()).context("set Ctrl+C handler")?;

    let dataset = Dataset::open(&cli.file_path)?;
    let opts = ScanOptions {
        workers: Some(cli.workers),
    };
    let titles = match scan_titles(&dataset, &opts, build_filters(cli), &cancel) {
        Ok(titles) => titles,
        Err(err) if err.is_voluntary_stop() => {
            log::info!("Stopping execution: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    log::debug!("{} matching titles", titles.len());

    let plot_filter = cli
        .plot_filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --plot-filter regex")?;

    match &cli.api_key {
        Some(key) => print_enriched(
            &titles,
            &LookupClient::new(key.clone()),
            plot_filter.as_ref(),
            cli.max_requests,
            &cancel,
        ),
        None => {
            for title in &titles {
                println!("{title:#?}");
            }
            Ok(())
        }
    }
}

/// Look up each matched title and print the pair, honoring the request budget,
/// the plot regex, and cancellation between requests.
fn print_enriched(
    titles: &[Title],
    client: &LookupClient,
    plot_filter: Option<&Regex>,
    max_requests: Option<usize>,
    cancel: &CancelToken,
) -> Result<()> {
    let budget = max_requests.unwrap_or(usize::MAX);
    for title in titles.iter().take(budget) {
        if let Some(reason) = cancel.stop_reason() {
            log::info!("Stopping execution: {reason}");
            break;
        }
        let item = client.info(&title.tconst)?;
        if let Some(re) = plot_filter
            && !re.is_match(&item.plot)
        {
            continue;
        }
        println!("title: {title:#?}\nlookup: {item:#?}\n");
    }
    Ok(())
}

/// Translate non-empty flag values into the filter chain, in flag order.
pub fn build_filters(cli: &Cli) -> FilterChain {
    let mut filters: FilterChain = Vec::new();
    if !cli.title_type.is_empty() {
        filters.push(Box::new(TitleTypeFilter(cli.title_type.clone())));
    }
    if !cli.primary_title.is_empty() {
        filters.push(Box::new(PrimaryTitleFilter(cli.primary_title.clone())));
    }
    if let Some(original_title) = &cli.original_title {
        filters.push(Box::new(OriginalTitleFilter(original_title.clone())));
    }
    if let Some(genre) = &cli.genre {
        filters.push(Box::new(GenreFilter(genre.clone())));
    }
    if !cli.genres.is_empty() {
        filters.push(Box::new(GenresFilter::new(cli.genres.iter().cloned())));
    }
    if let Some(start_year) = cli.start_year {
        filters.push(Box::new(StartYearFilter(start_year)));
    }
    if let Some(end_year) = cli.end_year {
        filters.push(Box::new(EndYearFilter(end_year)));
    }
    if let Some(runtime_minutes) = cli.runtime_minutes {
        filters.push(Box::new(RuntimeMinutesFilter(runtime_minutes)));
    }
    filters
}
