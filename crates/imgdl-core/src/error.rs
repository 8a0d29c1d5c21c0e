//! Error kinds shared by the fetcher, the converter and the HTTP layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImgdlError {
    /// Link and name lists disagree in length; the whole batch is refused.
    #[error("The number of links and names do not match!")]
    CountMismatch { links: usize, names: usize },

    /// A link carries no `id=<token>` part.
    #[error("no id token")]
    MissingIdentifierToken,

    /// A label sanitized down to nothing, so there is no file name to write.
    #[error("label has no usable characters")]
    EmptyName,

    /// The retrieval process could not be spawned or exited non-zero.
    #[error("{tool}: {detail}")]
    ExternalToolFailure { tool: String, detail: String },

    #[error("Unsupported file format. Please upload CSV or XLSX")]
    UnsupportedFileFormat,

    #[error("Column '{0}' not found in the uploaded file")]
    MissingColumn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("xlsx: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}

impl ImgdlError {
    /// Errors caused by the caller's input rather than by the host.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ImgdlError::CountMismatch { .. }
                | ImgdlError::UnsupportedFileFormat
                | ImgdlError::MissingColumn(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ImgdlError>;
