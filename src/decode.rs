//! Record decoder: one raw tab-delimited line into a [`Title`].

use crate::error::ScanError;
use crate::types::Title;

/// Column count of the `title.basics.tsv` schema.
pub const FIELD_COUNT: usize = 9;

/// The dataset's missing-value sentinel, decoded as 0 in numeric fields.
pub const MISSING: &str = r"\N";

/// Decode one data line into a fully-populated [`Title`].
///
/// The line must split into exactly [`FIELD_COUNT`] tab-separated fields.
/// Numeric cells accept either an integer or the `\N` sentinel; anything else
/// is a fatal [`ScanError::MalformedField`]. The genres cell is split on
/// commas unconditionally, so an empty cell yields `vec![""]`.
pub fn decode_title(line: &str) -> Result<Title, ScanError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ScanError::MalformedLine {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    Ok(Title {
        tconst: fields[0].to_string(),
        title_type: fields[1].to_string(),
        primary_title: fields[2].to_string(),
        original_title: fields[3].to_string(),
        is_adult: parse_numeric(fields[4], "isAdult")?,
        start_year: parse_numeric(fields[5], "startYear")?,
        end_year: parse_numeric(fields[6], "endYear")?,
        runtime_minutes: parse_numeric(fields[7], "runtimeMinutes")?,
        genres: fields[8].split(',').map(str::to_string).collect(),
    })
}

/// Parse a numeric cell, mapping the `\N` sentinel to 0.
fn parse_numeric(raw: &str, field: &'static str) -> Result<i32, ScanError> {
    if raw == MISSING {
        return Ok(0);
    }
    raw.parse().map_err(|_| ScanError::MalformedField {
        field,
        value: raw.to_string(),
    })
}
