// mod.rs - Output formatters module

use crate::data::Sample;
use crate::error::{MotifError, Result};
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_err(e: std::io::Error) -> MotifError {
    MotifError::output(format!("Write error: {}", e))
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                MotifError::output(format!(
                    "Failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

fn create_writer(file_path: &str) -> Result<BufWriter<File>> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path).map_err(|e| {
        MotifError::output(format!("Failed to create output file '{}': {}", file_path, e))
    })?;
    Ok(BufWriter::new(file))
}

fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Square matrix with a comment header, cells joined by `separator`
fn write_delimited<W: Write>(
    writer: &mut W,
    separator: char,
    ids: &[String],
    matrix: &[Vec<f64>],
    command_line: &str,
) -> Result<()> {
    writeln!(writer, "# Command: {}", command_line).map_err(write_err)?;
    writeln!(writer, "# Generated: {}", timestamp()).map_err(write_err)?;
    writeln!(writer, "# motifdist v{}", env!("CARGO_PKG_VERSION")).map_err(write_err)?;

    write!(writer, "Sample").map_err(write_err)?;
    for id in ids {
        write!(writer, "{}{}", separator, id).map_err(write_err)?;
    }
    writeln!(writer).map_err(write_err)?;

    for (i, id) in ids.iter().enumerate() {
        write!(writer, "{}", id).map_err(write_err)?;
        for score in &matrix[i] {
            write!(writer, "{}{}", separator, format_score(*score)).map_err(write_err)?;
        }
        writeln!(writer).map_err(write_err)?;
    }
    Ok(())
}

/// Write similarity matrix in TSV format
pub fn write_tsv(
    file_path: &str,
    ids: &[String],
    matrix: &[Vec<f64>],
    command_line: &str,
) -> Result<()> {
    let mut writer = create_writer(file_path)?;
    write_delimited(&mut writer, '\t', ids, matrix, command_line)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Write similarity matrix in CSV format
pub fn write_csv(
    file_path: &str,
    ids: &[String],
    matrix: &[Vec<f64>],
    command_line: &str,
) -> Result<()> {
    let mut writer = create_writer(file_path)?;
    write_delimited(&mut writer, ',', ids, matrix, command_line)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Write similarity matrix in PHYLIP format (lower triangle with diagonal)
pub fn write_phylip(
    file_path: &str,
    ids: &[String],
    matrix: &[Vec<f64>],
    command_line: &str,
) -> Result<()> {
    let mut writer = create_writer(file_path)?;

    writeln!(writer, "    {}", ids.len()).map_err(write_err)?;
    for (i, id) in ids.iter().enumerate() {
        write!(writer, "{:<10}", id).map_err(write_err)?;
        for score in &matrix[i][..=i] {
            write!(writer, "  {}", format_score(*score)).map_err(write_err)?;
        }
        writeln!(writer).map_err(write_err)?;
    }

    // Trailing comments, most PHYLIP parsers stop after the matrix
    writeln!(writer).map_err(write_err)?;
    writeln!(writer, "# Command: {}", command_line).map_err(write_err)?;
    writeln!(writer, "# Generated: {}", timestamp()).map_err(write_err)?;
    writeln!(writer, "# motifdist v{}", env!("CARGO_PKG_VERSION")).map_err(write_err)?;

    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Write similarity matrix in NEXUS format
pub fn write_nexus(
    file_path: &str,
    ids: &[String],
    matrix: &[Vec<f64>],
    command_line: &str,
) -> Result<()> {
    let mut writer = create_writer(file_path)?;

    writeln!(writer, "#NEXUS").map_err(write_err)?;
    writeln!(writer, "[Command: {}]", command_line).map_err(write_err)?;
    writeln!(writer, "[Generated: {}]", timestamp()).map_err(write_err)?;
    writeln!(writer, "[motifdist v{}]", env!("CARGO_PKG_VERSION")).map_err(write_err)?;
    writeln!(writer, "BEGIN DISTANCES;").map_err(write_err)?;
    writeln!(writer, "    DIMENSIONS NTAX={};", ids.len()).map_err(write_err)?;
    writeln!(writer, "    FORMAT LABELS LOWER DIAGONAL;").map_err(write_err)?;
    writeln!(writer, "    MATRIX").map_err(write_err)?;

    for (i, id) in ids.iter().enumerate() {
        write!(writer, "        {}", id).map_err(write_err)?;
        for score in &matrix[i][..=i] {
            write!(writer, " {}", format_score(*score)).map_err(write_err)?;
        }
        writeln!(writer).map_err(write_err)?;
    }

    writeln!(writer, "    ;").map_err(write_err)?;
    writeln!(writer, "END;").map_err(write_err)?;

    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Write similarity matrix in the specified format
pub fn write_matrix(
    file_path: &str,
    format: &str,
    ids: &[String],
    matrix: &[Vec<f64>],
    command_line: &str,
) -> Result<()> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, ids, matrix, command_line),
        "csv" => write_csv(file_path, ids, matrix, command_line),
        "phylip" => write_phylip(file_path, ids, matrix, command_line),
        "nexus" => write_nexus(file_path, ids, matrix, command_line),
        _ => Err(MotifError::output(format!(
            "Unsupported output format: {}. Use: tsv, csv, phylip, nexus",
            format
        ))),
    }
}

/// Write derived sequences as FASTA, one record per sample
pub fn write_fasta(file_path: &str, records: &[(Sample, String)]) -> Result<()> {
    let writer = create_writer(file_path)?;
    let mut fasta = bio::io::fasta::Writer::new(writer);

    for (sample, sequence) in records {
        let description = format!("region={} age={}", sample.region, sample.age);
        fasta
            .write(&sample.identifier, Some(description.as_str()), sequence.as_bytes())
            .map_err(write_err)?;
    }
    fasta.flush().map_err(write_err)?;

    Ok(())
}

/// Serialize one result as a single JSON line
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| MotifError::output(format!("Failed to serialize result: {}", e)))
}
