//! Spreadsheet column extraction: read an uploaded CSV or XLSX, keep two
//! named columns, write them back out as CSV.

mod read;
mod write;

pub use read::read_table;
pub use write::{write_csv, write_csv_file};

use crate::error::{ImgdlError, Result};
use crate::naming::allowed_extension;
use std::path::Path;

/// In-memory sheet: one header row plus data rows of the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Csv,
    Xlsx,
}

impl UploadFormat {
    /// Picks the reader for a whitelisted file name.
    pub fn from_filename(filename: &str, allowed: &[String]) -> Result<Self> {
        match allowed_extension(filename, allowed).as_deref() {
            Some("csv") => Ok(UploadFormat::Csv),
            Some("xlsx") => Ok(UploadFormat::Xlsx),
            _ => Err(ImgdlError::UnsupportedFileFormat),
        }
    }
}

/// Keeps `columns` (exact, case-sensitive header match) in the given order.
///
/// Fails on the first column of `columns` that the table lacks.
pub fn select_columns(table: &Table, columns: &[String]) -> Result<Table> {
    let mut indices = Vec::with_capacity(columns.len());
    for column in columns {
        let idx = table
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ImgdlError::MissingColumn(column.clone()))?;
        indices.push(idx);
    }

    let rows = table
        .rows
        .iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();
    Ok(Table {
        headers: columns.to_vec(),
        rows,
    })
}

/// Reads `input`, extracts `columns`, writes the result to `output`.
///
/// Nothing is written when the format is not allowed or a column is missing.
pub fn convert_file(
    input: &Path,
    columns: &[String],
    allowed: &[String],
    output: &Path,
) -> Result<Table> {
    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let format = UploadFormat::from_filename(&filename, allowed)?;
    let bytes = std::fs::read(input)?;
    let table = read_table(&bytes, format)?;
    let selected = select_columns(&table, columns)?;
    write_csv_file(&selected, output)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        rows = selected.rows.len(),
        "converted"
    );
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> Vec<String> {
        vec!["English Name".to_string(), "Official Photo".to_string()]
    }

    fn allowed() -> Vec<String> {
        vec!["csv".to_string(), "xlsx".to_string()]
    }

    const SHEET: &str = "Official Photo,Id,English Name,Notes\n\
                         https://x/?id=1,7,Jane Doe,a\n\
                         https://x/?id=2,8,Bob,b\n";

    #[test]
    fn format_from_filename() {
        assert_eq!(UploadFormat::from_filename("a.CSV", &allowed()).unwrap(), UploadFormat::Csv);
        assert_eq!(UploadFormat::from_filename("a.xlsx", &allowed()).unwrap(), UploadFormat::Xlsx);
        assert!(matches!(
            UploadFormat::from_filename("a.xls", &allowed()),
            Err(ImgdlError::UnsupportedFileFormat)
        ));
    }

    #[test]
    fn selects_in_contract_order() {
        let t = read_table(SHEET.as_bytes(), UploadFormat::Csv).unwrap();
        let s = select_columns(&t, &contract()).unwrap();
        assert_eq!(s.headers, contract());
        assert_eq!(s.rows.len(), t.rows.len());
        assert_eq!(s.rows[0], ["Jane Doe", "https://x/?id=1"]);
    }

    #[test]
    fn column_match_is_case_sensitive() {
        let t = read_table(b"English name,Official Photo\nx,y\n", UploadFormat::Csv).unwrap();
        match select_columns(&t, &contract()) {
            Err(ImgdlError::MissingColumn(c)) => assert_eq!(c, "English Name"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn convert_file_writes_two_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SHEET).unwrap();
        convert_file(&input, &contract(), &allowed(), &output).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "English Name,Official Photo\nJane Doe,https://x/?id=1\nBob,https://x/?id=2\n"
        );
    }

    #[test]
    fn convert_file_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        std::fs::write(&input, SHEET).unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        convert_file(&input, &contract(), &allowed(), &a).unwrap();
        convert_file(&input, &contract(), &allowed(), &b).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn convert_file_missing_column_leaves_output_alone() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "English Name,Other\nx,y\n").unwrap();
        std::fs::write(&output, "previous").unwrap();
        let err = convert_file(&input, &contract(), &allowed(), &output).unwrap_err();
        assert!(matches!(err, ImgdlError::MissingColumn(ref c) if c == "Official Photo"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }
}
