//! Dataset handle and line cursors.
//!
//! A [`Dataset`] is a validated, read-only view of the TSV file: opening it
//! reads the header once and checks the column count. Each shard worker gets
//! its own [`TsvCursor`] from [`Dataset::reader`], so workers never share a
//! read position and no locking is needed on the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::decode::FIELD_COUNT;
use crate::error::ScanError;

/// Forward-only line cursor over a dataset.
///
/// `advance` distinguishes clean end-of-stream (`Ok(false)`) from an
/// underlying read fault (`Err`). The shard scanner's per-record step is
/// generic over this trait so it can run against a mock cursor in tests.
pub trait LineCursor {
    /// Move to the next line. `Ok(true)` when a line is available via
    /// [`line`](Self::line), `Ok(false)` at end of input.
    fn advance(&mut self) -> Result<bool, ScanError>;

    /// The current line, without its trailing newline. Only meaningful after
    /// `advance` returned `Ok(true)`.
    fn line(&self) -> &str;
}

/// Buffered line cursor over an open file handle.
pub struct TsvCursor {
    reader: BufReader<File>,
    buf: String,
}

impl TsvCursor {
    fn open(path: &Path) -> Result<Self, ScanError> {
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            buf: String::new(),
        })
    }
}

impl LineCursor for TsvCursor {
    fn advance(&mut self) -> Result<bool, ScanError> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        // Strip the line terminator; the last line may not have one.
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }

    fn line(&self) -> &str {
        &self.buf
    }
}

/// A validated, read-only view of a `title.basics.tsv`-shaped file.
///
/// Multiple independent readers to the same dataset may coexist; the header
/// is validated once here and never re-checked per line.
#[derive(Clone, Debug)]
pub struct Dataset {
    path: PathBuf,
}

impl Dataset {
    /// Open the dataset and validate its header row.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let mut cursor = TsvCursor::open(path)?;
        // A fault while reading the header is an open failure, not a scan fault.
        let has_header = cursor.advance().map_err(|err| match err {
            ScanError::Read(source) => ScanError::Open {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        if !has_header {
            // An empty file has no header at all.
            return Err(ScanError::InvalidHeader {
                expected: FIELD_COUNT,
                found: 0,
            });
        }
        let found = cursor.line().split('\t').count();
        if found != FIELD_COUNT {
            return Err(ScanError::InvalidHeader {
                expected: FIELD_COUNT,
                found,
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Open a fresh, independent cursor positioned before the header line.
    pub fn reader(&self) -> Result<TsvCursor, ScanError> {
        TsvCursor::open(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
