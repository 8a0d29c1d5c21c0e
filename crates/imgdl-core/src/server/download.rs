//! `GET /download_images`

use super::error::ApiError;
use super::AppState;
use crate::fetch::{self, DownloadOutcome};
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DownloadReport {
    pub downloads: Vec<DownloadOutcome>,
}

/// Runs the configured link/name lists through the batch fetcher.
///
/// Per-item failures are inside the 200 payload; only a count mismatch (400)
/// or an unreadable list file (500) fail the request.
pub async fn download_images(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let state = state.into_inner();
    let outcomes = web::block(move || {
        fetch::run_from_lists(&state.fetcher, &state.config.fetch, |_, _| {})
    })
    .await??;

    Ok(HttpResponse::Ok().json(DownloadReport { downloads: outcomes }))
}
