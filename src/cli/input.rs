//! Record input for the CLI: a JSON array of records from a file or stdin
//!
//! Only the array itself must be valid JSON. Each element is checked on its
//! own during normalization, so one malformed record is skipped instead of
//! failing the whole file.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use trendline::services::{normalize_values, NormalizedRecords};
use trendline::types::Result;

/// Read and normalize records from `path`, or from stdin when `path` is `-`
pub fn read_records(path: &Path) -> Result<NormalizedRecords> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    parse_records(&contents)
}

pub fn parse_records(contents: &str) -> Result<NormalizedRecords> {
    if contents.trim().is_empty() {
        return Ok(NormalizedRecords::default());
    }
    let values: Vec<Value> = serde_json::from_str(contents)?;
    Ok(normalize_values(&values))
}
