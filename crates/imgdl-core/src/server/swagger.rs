//! API description (`/swagger.json`) and a Swagger UI page (`/swagger`).

use super::AppState;
use crate::config::ConvertConfig;
use actix_web::{web, HttpResponse};
use serde_json::{json, Value};

pub const API_TITLE: &str = "Image Downloader API";

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Image Downloader API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Swagger 2.0 document for the two endpoints.
pub fn api_document(convert: &ConvertConfig) -> Value {
    let columns = convert
        .columns
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(" and ");
    let extensions = convert
        .allowed_extensions
        .iter()
        .map(|e| e.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(" or ");

    json!({
        "swagger": "2.0",
        "info": {
            "title": API_TITLE,
            "description": "API for downloading images from Google Drive links and extracting columns from uploaded spreadsheets",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/download_images": {
                "get": {
                    "summary": "Download images from Google Drive links",
                    "produces": ["application/json"],
                    "responses": {
                        "200": { "description": "List of download outcomes, one per link" },
                        "400": { "description": "Bad request, mismatch between links and names" },
                        "500": { "description": "Internal server error" }
                    }
                }
            },
            "/upload_convert": {
                "post": {
                    "summary": format!("Upload a file and convert it to CSV, extract {columns} columns"),
                    "consumes": ["multipart/form-data"],
                    "produces": ["text/csv", "application/json"],
                    "parameters": [
                        {
                            "name": "file",
                            "in": "formData",
                            "description": format!("File to upload ({extensions})"),
                            "required": true,
                            "type": "file"
                        }
                    ],
                    "responses": {
                        "200": { "description": "CSV file with extracted columns successfully created" },
                        "400": { "description": "Bad request or unsupported file format" },
                        "500": { "description": "Internal server error" }
                    }
                }
            }
        }
    })
}

pub async fn swagger_json(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(api_document(&state.config.convert))
}

pub async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SWAGGER_UI_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_paths() {
        let doc = api_document(&ConvertConfig::default());
        assert_eq!(doc["swagger"], "2.0");
        assert_eq!(doc["info"]["title"], API_TITLE);
        assert!(doc["paths"]["/download_images"]["get"].is_object());
        assert_eq!(
            doc["paths"]["/upload_convert"]["post"]["summary"],
            "Upload a file and convert it to CSV, extract 'English Name' and 'Official Photo' columns"
        );
        assert_eq!(
            doc["paths"]["/upload_convert"]["post"]["parameters"][0]["description"],
            "File to upload (CSV or XLSX)"
        );
    }

    #[test]
    fn ui_page_is_complete() {
        assert!(SWAGGER_UI_PAGE.contains(r##"dom_id: "#swagger-ui""##));
        assert!(SWAGGER_UI_PAGE.trim_end().ends_with("</html>"));
    }
}
