//! Reading production records from JSON.
//!
//! Two layouts are accepted: one JSON array of objects, or one object per line.

use anyhow::{Context, Result};
use pcp_types::Record;
use std::io::Read;
use std::path::Path;

/// Read records from `path`, or from stdin when `path` is `-`.
pub fn read_records_from(path: &Path) -> Result<Vec<Record>> {
    let mut contents = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut contents).context("Failed to read stdin")?;
    } else {
        contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
    }
    parse_records(&contents)
}

/// Parse a JSON array of objects or newline-delimited objects.
pub fn parse_records(contents: &str) -> Result<Vec<Record>> {
    let trimmed = contents.trim_start();
    if trimmed.starts_with('[') {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(trimmed).context("Invalid JSON array of records")?;
        return values
            .iter()
            .enumerate()
            .map(|(row, value)| Record::try_from(value).with_context(|| format!("Record {row}")))
            .collect();
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let value: serde_json::Value = serde_json::from_str(line)
                .with_context(|| format!("Invalid JSON on line {}", index + 1))?;
            Record::try_from(&value).with_context(|| format!("Line {}", index + 1))
        })
        .collect()
}
