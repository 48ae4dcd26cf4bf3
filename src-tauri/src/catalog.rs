use crate::config::AppConfig;
use crate::csv_store;
use crate::error::{AppError, Result};
use crate::images;
use crate::models::{NewProduct, ProductRecord, ProductRow, SortColumn};
use crate::pricing;
use log::{error, info, warn};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;
use tauri::{AppHandle, Manager};

pub struct Catalog {
    pub products: Mutex<Vec<ProductRecord>>,
    pub config: AppConfig,
    /// Thumbnails keyed by resolved path, valid while the file's
    /// modification time is unchanged.
    pub thumbnails: Mutex<HashMap<PathBuf, (SystemTime, Option<String>)>>,
}

impl Catalog {
    pub fn open(config: AppConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        std::fs::create_dir_all(config.image_dir())?;

        let csv_path = config.csv_path();
        let products = if csv_path.exists() {
            match csv_store::read_products(&csv_path) {
                Ok(products) => {
                    info!("Loaded {} products from {}", products.len(), csv_path.display());
                    products
                }
                Err(e) => {
                    // Keep the unreadable file so the next save doesn't destroy it
                    error!("Failed to load {}: {}", csv_path.display(), e);
                    let backup = csv_path.with_extension("csv.bak");
                    if let Err(e) = std::fs::copy(&csv_path, &backup) {
                        warn!("Could not back up {}: {}", csv_path.display(), e);
                    }
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Catalog {
            products: Mutex::new(products),
            config,
            thumbnails: Mutex::new(HashMap::new()),
        })
    }

    fn records(&self) -> MutexGuard<'_, Vec<ProductRecord>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<ProductRecord> {
        self.records().clone()
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.list().into_iter().map(|record| self.row(record)).collect()
    }

    pub fn row(&self, record: ProductRecord) -> ProductRow {
        let thumbnail = record
            .image_path
            .as_deref()
            .and_then(|path| self.thumbnail(&self.config.resolve(path)));

        ProductRow { record, thumbnail }
    }

    fn thumbnail(&self, path: &Path) -> Option<String> {
        let modified = match std::fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            // Missing file: let the thumbnail builder log it, don't cache
            Err(_) => return images::thumbnail_data_url(path),
        };

        let mut cache = self.thumbnails.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_at, thumbnail)) = cache.get(path) {
            if *cached_at == modified {
                return thumbnail.clone();
            }
        }

        let thumbnail = images::thumbnail_data_url(path);
        cache.insert(path.to_path_buf(), (modified, thumbnail.clone()));
        thumbnail
    }

    pub fn add(&self, product: NewProduct) -> Result<ProductRecord> {
        let price = pricing::parse_price(&product.price)?;
        let quantity = pricing::parse_quantity(&product.quantity)?;

        let prices = pricing::checked_prices(price, quantity)?;
        let record = ProductRecord::new(product.name, prices);
        self.records().push(record.clone());

        info!("Added product {:?} (price {}, quantity {})", record.name, price, quantity);
        Ok(record)
    }

    /// Removes the first product with this name. Returns false if none matched.
    pub fn delete(&self, name: &str) -> bool {
        let mut products = self.records();
        match products.iter().position(|p| p.name == name) {
            Some(index) => {
                products.remove(index);
                info!("Deleted product {:?}", name);
                true
            }
            None => false,
        }
    }

    /// Numeric columns sort descending with unparsable values last; names
    /// sort ascending ignoring case.
    pub fn sort(&self, column: SortColumn) {
        let mut products = self.records();

        if column.is_numeric() {
            products.sort_by(|a, b| {
                match (
                    pricing::parse_amount(a.field(column)),
                    pricing::parse_amount(b.field(column)),
                ) {
                    (Some(x), Some(y)) => y.total_cmp(&x),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        } else {
            products.sort_by_cached_key(|p| p.name.to_lowercase());
        }
    }

    pub fn attach_image(&self, name: &str, source: &Path) -> Result<ProductRecord> {
        if !self.records().iter().any(|p| p.name == name) {
            return Err(AppError::ProductNotFound(name.to_string()));
        }

        let target = images::import_image(source, &self.config.image_dir())?;

        // Stored relative to the data directory so the folder can move
        let stored = target
            .file_name()
            .and_then(|f| f.to_str())
            .map(|f| Path::new(&self.config.image_dir_name).join(f))
            .and_then(|p| p.to_str().map(str::to_string))
            .ok_or_else(|| {
                AppError::InvalidFormat(format!("unusable image path: {}", target.display()))
            })?;

        let mut products = self.records();
        let product = products
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::ProductNotFound(name.to_string()))?;
        product.image_path = Some(stored);

        info!("Attached image {} to {:?}", target.display(), name);
        Ok(product.clone())
    }

    pub fn image_path(&self, name: &str) -> Result<Option<PathBuf>> {
        let products = self.records();
        let product = products
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::ProductNotFound(name.to_string()))?;

        Ok(product.image_path.as_deref().map(|p| self.config.resolve(p)))
    }

    pub fn save(&self) -> Result<()> {
        let products = self.list();
        let path = self.config.csv_path();
        csv_store::write_products(&path, &products)?;

        info!("Saved {} products to {}", products.len(), path.display());
        Ok(())
    }
}

pub trait CatalogExt {
    fn catalog(&self) -> &Catalog;
}

impl CatalogExt for AppHandle {
    fn catalog(&self) -> &Catalog {
        self.state::<Catalog>().inner()
    }
}
