//! CSV output.

use super::Table;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes `table` as CSV: header row first, `\n` terminated, quoting only where needed.
pub fn write_csv<W: Write>(table: &Table, out: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `table` to `path`, replacing any existing file.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    std::fs::write(path, buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lf_and_minimal_quotes() {
        let t = Table {
            headers: vec!["English Name".into(), "Official Photo".into()],
            rows: vec![
                vec!["Doe, Jane".into(), "https://x/?id=1".into()],
                vec!["Bob".into(), String::new()],
            ],
        };
        let mut buf = Vec::new();
        write_csv(&t, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "English Name,Official Photo\n\"Doe, Jane\",https://x/?id=1\nBob,\n"
        );
    }
}
