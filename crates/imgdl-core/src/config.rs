use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Batch fetch settings (`[fetch]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Newline-delimited list of shared-drive links.
    pub link_list: PathBuf,
    /// Newline-delimited list of labels, one per link.
    pub name_list: PathBuf,
    /// Directory the images are written to.
    pub download_dir: PathBuf,
    /// External retrieval program, invoked once per item.
    pub tool: String,
    /// Extension appended to every sanitized name (without the dot).
    pub extension: String,
    /// Pass `--no-check-certificate` to the retrieval tool. Off unless set.
    pub insecure_tls: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            link_list: PathBuf::from("linkList.txt"),
            name_list: PathBuf::from("nameList.txt"),
            download_dir: PathBuf::from("./downloads"),
            tool: "wget".to_string(),
            extension: "png".to_string(),
            insecure_tls: false,
        }
    }
}

/// Upload conversion settings (`[convert]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Where raw uploads and converted CSVs are stored.
    pub upload_dir: PathBuf,
    /// Columns to extract, matched by exact (case-sensitive) header name.
    pub columns: Vec<String>,
    /// Accepted upload extensions, lower-case.
    pub allowed_extensions: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
            columns: vec!["English Name".to_string(), "Official Photo".to_string()],
            allowed_extensions: vec!["csv".to_string(), "xlsx".to_string()],
        }
    }
}

/// Global configuration loaded from `~/.config/imgdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgdlConfig {
    /// Address the HTTP service binds to.
    pub bind: String,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
}

impl Default for ImgdlConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            fetch: FetchConfig::default(),
            convert: ConvertConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ImgdlConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: ImgdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
