use std::path::{Path, PathBuf};
use tauri::{AppHandle, Manager};

pub const DATA_DIR_ENV: &str = "AUCTION_ANALYZER_DATA_DIR";
pub const DEFAULT_CSV_FILE: &str = "products_history.csv";
pub const DEFAULT_IMAGE_DIR: &str = "product_images";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub csv_file_name: String,
    pub image_dir_name: String,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        AppConfig {
            data_dir: data_dir.into(),
            csv_file_name: DEFAULT_CSV_FILE.to_string(),
            image_dir_name: DEFAULT_IMAGE_DIR.to_string(),
        }
    }

    /// Resolves the data directory from the environment override, falling
    /// back to the platform app data directory.
    pub fn from_app(app: &AppHandle) -> tauri::Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => app.path().app_data_dir()?,
        };

        Ok(Self::new(data_dir))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file_name)
    }

    pub fn image_dir(&self) -> PathBuf {
        self.data_dir.join(&self.image_dir_name)
    }

    /// Relative image paths (as written by older versions) are taken
    /// relative to the data directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}
