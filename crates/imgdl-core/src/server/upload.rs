//! `POST /upload_convert`

use super::error::ApiError;
use super::AppState;
use crate::convert::{read_table, select_columns, write_csv_file, UploadFormat};
use crate::naming::secure_upload_name;
use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use std::path::PathBuf;
use uuid::Uuid;

/// Name the converted CSV is offered under.
pub const PROCESSED_FILENAME: &str = "processed_data.csv";

/// The `file` part of a multipart upload.
struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

/// Pulls the `file` field out of the form, draining every other field.
async fn read_file_field(payload: &mut Multipart) -> Result<Option<UploadedFile>, ApiError> {
    let mut upload = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;
        let is_file = field.name() == Some("file");
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
            .unwrap_or_default();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;
            if is_file {
                data.extend_from_slice(&bytes);
            }
        }

        if is_file && upload.is_none() {
            upload = Some(UploadedFile { filename, data });
        }
    }

    Ok(upload)
}

/// Accepts a CSV/XLSX upload and returns a CSV holding only the configured columns.
///
/// Each request writes its own `<uuid>-<name>` and `<uuid>-processed_data.csv`
/// under the upload dir, so concurrent uploads never share a path. The raw
/// `<uuid>-<name>` copy is removed once the conversion has finished.
pub async fn upload_convert(
    req: HttpRequest,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let upload = read_file_field(&mut payload)
        .await?
        .ok_or(ApiError::NoFilePart)?;
    if upload.filename.is_empty() {
        return Err(ApiError::NoSelectedFile);
    }

    let convert_cfg = &state.config.convert;
    let format = UploadFormat::from_filename(&upload.filename, &convert_cfg.allowed_extensions)?;

    let request_id = Uuid::new_v4();
    let upload_dir = convert_cfg.upload_dir.clone();
    tokio::fs::create_dir_all(&upload_dir).await?;
    let raw_path = upload_dir.join(format!("{request_id}-{}", secure_upload_name(&upload.filename)));
    tokio::fs::write(&raw_path, &upload.data).await?;
    tracing::info!(%request_id, path = %raw_path.display(), bytes = upload.data.len(), "upload stored");

    let out_path: PathBuf = upload_dir.join(format!("{request_id}-{PROCESSED_FILENAME}"));
    let columns = convert_cfg.columns.clone();
    let data = upload.data;
    let target = out_path.clone();
    let converted = web::block(move || -> crate::error::Result<usize> {
        let table = read_table(&data, format)?;
        let selected = select_columns(&table, &columns)?;
        write_csv_file(&selected, &target)?;
        Ok(selected.rows.len())
    })
    .await;
    if let Err(e) = tokio::fs::remove_file(&raw_path).await {
        tracing::warn!(%request_id, path = %raw_path.display(), error = %e, "could not remove raw upload");
    }
    let rows = converted??;
    tracing::info!(%request_id, rows, path = %out_path.display(), "conversion written");

    let file = NamedFile::open_async(&out_path)
        .await?
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(PROCESSED_FILENAME.to_string())],
        });
    Ok(file.into_response(&req))
}
