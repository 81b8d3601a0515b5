// delimited.rs - CSV/TSV loader for sample records

use crate::data::sample::SampleRecord;
use crate::error::{MotifError, Result};
use std::io::Read;
use std::path::Path;

/// Columns every sample file must declare
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "region", "age", "seed"];

/// Pick the field delimiter from the file extension (comma unless .tsv/.txt)
pub fn delimiter_for_path(file_path: &Path) -> u8 {
    match file_path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("tsv") | Some("txt") | Some("tab") => b'\t',
        _ => b',',
    }
}

/// Load candidate sample rows from a delimited file
pub fn load_samples(file_path: &Path) -> Result<Vec<SampleRecord>> {
    let file = std::fs::File::open(file_path).map_err(|e| {
        MotifError::invalid_input(format!(
            "Failed to read sample file '{}': {}",
            file_path.display(),
            e
        ))
    })?;

    let records = load_records_from_reader(file, delimiter_for_path(file_path))?;
    log::info!(
        "Loaded {} candidate rows from {}",
        records.len(),
        file_path.display()
    );
    Ok(records)
}

/// Parse candidate rows from any reader.
///
/// A header lacking one of [`REQUIRED_COLUMNS`] fails the batch; missing
/// values inside rows are left for ingest to filter.
pub fn load_records_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<SampleRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| MotifError::invalid_input(format!("Failed to read header: {}", e)))?
        .clone();

    let columns: Vec<&str> = headers.iter().map(|h| h.trim_matches('"')).collect();
    for required in REQUIRED_COLUMNS {
        let found = columns
            .iter()
            .any(|c| *c == required || (required == "id" && *c == "identifier"));
        if !found {
            return Err(MotifError::invalid_input(format!(
                "Missing required column '{}' (found: {})",
                required,
                columns.join(", ")
            )));
        }
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<SampleRecord>().enumerate() {
        let record = row.map_err(|e| {
            MotifError::invalid_input(format!("Malformed row {}: {}", index + 1, e))
        })?;
        records.push(record);
    }

    Ok(records)
}
