//! CSV and XLSX readers.

use super::{Table, UploadFormat};
use crate::error::Result;
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// Parses `bytes` as `format`. The first row is the header row.
pub fn read_table(bytes: &[u8], format: UploadFormat) -> Result<Table> {
    match format {
        UploadFormat::Csv => read_csv(bytes),
        UploadFormat::Xlsx => read_xlsx(bytes),
    }
}

fn read_csv(bytes: &[u8]) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(pad(record.iter().map(str::to_string).collect(), headers.len()));
    }
    Ok(Table { headers, rows })
}

fn read_xlsx(bytes: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Table::default()),
    };

    let mut iter = range.rows();
    let headers: Vec<String> = match iter.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => return Ok(Table::default()),
    };
    let rows = iter
        .map(|row| pad(row.iter().map(cell_text).collect(), headers.len()))
        .collect();
    Ok(Table { headers, rows })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Ragged rows are padded with empty cells so every row can be indexed by header position.
fn pad(mut row: Vec<String>, width: usize) -> Vec<String> {
    if row.len() < width {
        row.resize(width, String::new());
    }
    row
}
