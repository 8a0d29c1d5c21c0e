#![allow(dead_code)]

pub mod fake_tool;

use imgdl_core::config::{ConvertConfig, FetchConfig, ImgdlConfig};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const BOUNDARY: &str = "imgdl-test-boundary";

/// Config whose every path lives under `root`.
pub fn config_in(root: &Path) -> ImgdlConfig {
    ImgdlConfig {
        bind: "127.0.0.1:0".to_string(),
        fetch: FetchConfig {
            link_list: root.join("linkList.txt"),
            name_list: root.join("nameList.txt"),
            download_dir: root.join("downloads"),
            ..FetchConfig::default()
        },
        convert: ConvertConfig {
            upload_dir: root.join("uploads"),
            ..ConvertConfig::default()
        },
    }
}

/// Content-Type header value matching [`multipart_body`].
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// A multipart/form-data body with a single part.
///
/// `filename: None` omits the filename parameter entirely.
pub fn multipart_body(field: &str, filename: Option<&str>, content: &[u8]) -> Vec<u8> {
    let mut disposition = format!("form-data; name=\"{field}\"");
    if let Some(name) = filename {
        disposition.push_str(&format!("; filename=\"{name}\""));
    }
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Workbook bytes with a single sheet of string cells; empty strings are left blank.
pub fn xlsx_sheet(rows: &[&[&str]]) -> Vec<u8> {
    let mut book = Workbook::new();
    let sheet = book.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if !cell.is_empty() {
                sheet.write_string(r as u32, c as u16, *cell).unwrap();
            }
        }
    }
    book.save_to_buffer().unwrap()
}
