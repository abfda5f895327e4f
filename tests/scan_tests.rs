//! End-to-end scan tests over on-disk datasets.

use std::collections::HashSet;
use std::io::Write;
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use titlescan::cancel::CancelToken;
use titlescan::dataset::Dataset;
use titlescan::error::ScanError;
use titlescan::filters::{FilterChain, GenreFilter, TitleTypeFilter};
use titlescan::scan::scan_titles;
use titlescan::types::{ScanOptions, Title};
use titlescan::{Filter, scan_file};

const HEADER: &str =
    "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres";
const CARMENCITA: &str =
    "tt0000001\tshort\tCarmencita\tCarmencita\t0\t1894\t2020\t1\tDocumentary,Short";
const LE_CLOWN: &str =
    "tt0000002\tshort\tLe clown et ses chiens\tLe clown et ses chiens\t\\N\t\\N\t\\N\t\\N\tAnimation,Short";

fn write_dataset(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn scan_set(dataset: &Dataset, workers: usize, filters: FilterChain) -> HashSet<Title> {
    let opts = ScanOptions {
        workers: Some(workers),
    };
    scan_titles(dataset, &opts, filters, &CancelToken::new())
        .unwrap()
        .into_iter()
        .collect()
}

fn seven_rows() -> Vec<String> {
    let mut lines = vec![HEADER.to_string()];
    for i in 1..=7 {
        lines.push(format!(
            "tt{i:07}\tshort\tTitle {i}\tTitle {i}\t0\t{}\t\\N\t{i}\tShort",
            1890 + i
        ));
    }
    lines
}

// --- dataset open / header validation ---

#[test]
fn test_open_rejects_short_header() {
    let file = write_dataset(&["tconst\ttitleType\tprimaryTitle"]);
    match Dataset::open(file.path()) {
        Err(ScanError::InvalidHeader { expected, found }) => {
            assert_eq!(expected, 9);
            assert_eq!(found, 3);
        }
        other => panic!("expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn test_open_rejects_empty_file() {
    let file = write_dataset(&[]);
    match Dataset::open(file.path()) {
        Err(ScanError::InvalidHeader { found, .. }) => assert_eq!(found, 0),
        other => panic!("expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn test_open_rejects_missing_file() {
    assert!(matches!(
        Dataset::open("/definitely/not/here.tsv"),
        Err(ScanError::Open { .. })
    ));
}

#[test]
fn test_header_only_dataset_scans_empty() {
    let file = write_dataset(&[HEADER]);
    let dataset = Dataset::open(file.path()).unwrap();
    assert!(scan_set(&dataset, 3, Vec::new()).is_empty());
}

// --- concrete scenarios ---

#[test]
fn test_two_row_dataset_decodes_both_records() {
    let file = write_dataset(&[HEADER, CARMENCITA, LE_CLOWN]);
    let dataset = Dataset::open(file.path()).unwrap();
    let got = scan_set(&dataset, 1, Vec::new());

    let expected: HashSet<Title> = [
        Title {
            tconst: "tt0000001".into(),
            title_type: "short".into(),
            primary_title: "Carmencita".into(),
            original_title: "Carmencita".into(),
            is_adult: 0,
            start_year: 1894,
            end_year: 2020,
            runtime_minutes: 1,
            genres: vec!["Documentary".into(), "Short".into()],
        },
        Title {
            tconst: "tt0000002".into(),
            title_type: "short".into(),
            primary_title: "Le clown et ses chiens".into(),
            original_title: "Le clown et ses chiens".into(),
            is_adult: 0,
            start_year: 0,
            end_year: 0,
            runtime_minutes: 0,
            genres: vec!["Animation".into(), "Short".into()],
        },
    ]
    .into();
    assert_eq!(got, expected);
}

#[test]
fn test_movie_filter_matches_nothing_in_shorts_dataset() {
    let file = write_dataset(&[HEADER, CARMENCITA, LE_CLOWN]);
    let dataset = Dataset::open(file.path()).unwrap();
    let chain: FilterChain = vec![Box::new(TitleTypeFilter("movie".into()))];
    assert!(scan_set(&dataset, 1, chain).is_empty());
}

#[test]
fn test_three_workers_match_single_worker_on_five_rows() {
    let lines: Vec<String> = seven_rows().into_iter().take(6).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_dataset(&refs);
    let dataset = Dataset::open(file.path()).unwrap();

    let sequential = scan_set(&dataset, 1, Vec::new());
    assert_eq!(sequential.len(), 5);
    assert_eq!(scan_set(&dataset, 3, Vec::new()), sequential);
}

// --- partitioning properties ---

#[test]
fn test_any_worker_count_yields_same_set() {
    let lines = seven_rows();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_dataset(&refs);
    let dataset = Dataset::open(file.path()).unwrap();

    let sequential = scan_set(&dataset, 1, Vec::new());
    assert_eq!(sequential.len(), 7);
    for workers in 2..=10 {
        assert_eq!(
            scan_set(&dataset, workers, Vec::new()),
            sequential,
            "worker count {workers} dropped or duplicated records"
        );
    }
}

#[test]
fn test_repeated_scans_are_idempotent() {
    let lines = seven_rows();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_dataset(&refs);
    let dataset = Dataset::open(file.path()).unwrap();

    let first = scan_set(&dataset, 4, Vec::new());
    let second = scan_set(&dataset, 4, Vec::new());
    assert_eq!(first, second);
}

// --- filtering through the full scan ---

#[test]
fn test_chain_keeps_only_records_accepted_by_every_filter() {
    let file = write_dataset(&[
        HEADER,
        CARMENCITA,
        LE_CLOWN,
        "tt0000003\tmovie\tThe Mask\tThe Mask\t0\t1994\t\\N\t101\tComedy,Crime",
    ]);
    let dataset = Dataset::open(file.path()).unwrap();

    let chain: FilterChain = vec![
        Box::new(TitleTypeFilter("short".into())),
        Box::new(GenreFilter("Animation".into())),
    ];
    let got = scan_set(&dataset, 2, chain);
    assert_eq!(got.len(), 1);
    assert!(got.iter().all(|t| t.tconst == "tt0000002"));
}

#[test]
fn test_result_matches_per_record_chain_evaluation() {
    let lines = seven_rows();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_dataset(&refs);
    let dataset = Dataset::open(file.path()).unwrap();

    let everything = scan_set(&dataset, 1, Vec::new());
    let chain: FilterChain = vec![Box::new(GenreFilter("Short".into()))];
    let filtered = scan_set(&dataset, 3, chain);

    let reference_filter = GenreFilter("Short".into());
    let expected: HashSet<Title> = everything
        .into_iter()
        .filter(|t| reference_filter.matches(t))
        .collect();
    assert_eq!(filtered, expected);
}

// --- failure and cancellation ---

#[test]
fn test_malformed_row_aborts_the_scan() {
    let file = write_dataset(&[
        HEADER,
        CARMENCITA,
        "tt0000009\tshort\tBad\tBad\t0\toops\t\\N\t1\tShort",
    ]);
    let dataset = Dataset::open(file.path()).unwrap();
    let opts = ScanOptions { workers: Some(2) };
    match scan_titles(&dataset, &opts, Vec::new(), &CancelToken::new()) {
        Err(ScanError::MalformedField { field, .. }) => assert_eq!(field, "startYear"),
        other => panic!("expected MalformedField, got {other:?}"),
    }
}

#[test]
fn test_cancellation_before_first_record_is_prompt() {
    let lines = seven_rows();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_dataset(&refs);
    let dataset = Dataset::open(file.path()).unwrap();

    let cancel = CancelToken::new();
    cancel.cancel();
    let opts = ScanOptions { workers: Some(4) };
    let start = Instant::now();
    let result = scan_titles(&dataset, &opts, Vec::new(), &cancel);
    assert!(start.elapsed() < Duration::from_secs(5));
    match result {
        Err(err) => assert!(err.is_voluntary_stop()),
        Ok(titles) => assert!(titles.is_empty()),
    }
}

#[test]
fn test_expired_deadline_reports_deadline_exceeded() {
    let file = write_dataset(&[HEADER, CARMENCITA]);
    let dataset = Dataset::open(file.path()).unwrap();
    let cancel = CancelToken::with_deadline(Duration::ZERO);
    let opts = ScanOptions { workers: Some(1) };
    match scan_titles(&dataset, &opts, Vec::new(), &cancel) {
        Err(err) => assert!(matches!(err, ScanError::DeadlineExceeded)),
        Ok(titles) => assert!(titles.is_empty()),
    }
}

// --- scan_file entry point ---

#[test]
fn test_scan_file_opens_and_scans() {
    let file = write_dataset(&[HEADER, CARMENCITA, LE_CLOWN]);
    let titles = scan_file(
        file.path(),
        &ScanOptions::default(),
        Vec::new(),
        &CancelToken::new(),
    )
    .unwrap();
    assert_eq!(titles.len(), 2);
}
