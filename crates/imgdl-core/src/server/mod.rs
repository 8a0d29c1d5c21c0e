//! HTTP service: `/download_images`, `/upload_convert` and the API description.

mod download;
mod error;
mod swagger;
mod upload;

pub use download::{download_images, DownloadReport};
pub use error::ApiError;
pub use swagger::{api_document, swagger_json, swagger_ui, API_TITLE};
pub use upload::{upload_convert, PROCESSED_FILENAME};

use crate::config::ImgdlConfig;
use crate::fetch::{BatchFetcher, RetrievalTool};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub config: ImgdlConfig,
    pub fetcher: BatchFetcher,
}

impl AppState {
    pub fn new(config: ImgdlConfig, tool: Arc<dyn RetrievalTool>) -> Self {
        let fetcher = BatchFetcher::new(
            tool,
            config.fetch.download_dir.clone(),
            config.fetch.extension.clone(),
        );
        Self { config, fetcher }
    }
}

/// Registers every route on an actix `App`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/download_images", web::get().to(download_images))
        .route("/upload_convert", web::post().to(upload_convert))
        .route("/swagger.json", web::get().to(swagger_json))
        .route("/swagger", web::get().to(swagger_ui));
}

/// Binds `config.bind` and serves until the process is stopped.
pub async fn serve(config: ImgdlConfig, tool: Arc<dyn RetrievalTool>) -> Result<()> {
    let bind_addr = config.bind.clone();
    if config.fetch.insecure_tls {
        tracing::warn!("certificate verification is disabled for image retrieval");
    }
    let state = web::Data::new(AppState::new(config, tool));

    tracing::info!("starting HTTP server on {}", bind_addr);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("bind {bind_addr}"))?
    .run();

    server.await.context("HTTP server")?;
    tracing::info!("HTTP server stopped");
    Ok(())
}
