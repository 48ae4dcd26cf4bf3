use crate::error::{AppError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use log::{debug, warn};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const THUMBNAIL_SIZE: u32 = 50;
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Copies `source` into `image_dir` under its own file name and returns the
/// new path. A different file already using that name is left alone and the
/// copy gets a timestamp suffix instead.
pub fn import_image(source: &Path, image_dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| AppError::InvalidFormat(format!("not a file: {}", source.display())))?;
    if file_name.to_str().is_none() {
        return Err(AppError::InvalidFormat(format!(
            "image file name is not valid UTF-8: {}",
            source.display()
        )));
    }

    std::fs::create_dir_all(image_dir)?;

    let mut target = image_dir.join(file_name);
    if target.exists() {
        if same_file(source, &target) {
            return Ok(target);
        }
        target = image_dir.join(timestamped_name(source));
    }

    std::fs::copy(source, &target)?;
    debug!("Copied {} to {}", source.display(), target.display());

    Ok(target)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn timestamped_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S%3f");

    match source.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    }
}

/// Builds a PNG data URL of the image scaled to fit 50x50. Failures are
/// logged and leave the table cell empty.
pub fn thumbnail_data_url(path: &Path) -> Option<String> {
    match build_thumbnail(path) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("Error creating thumbnail for {}: {}", path.display(), e);
            None
        }
    }
}

fn build_thumbnail(path: &Path) -> Result<String> {
    let img = image::open(path)?;
    let thumb = img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE);

    let mut bytes = Vec::new();
    thumb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}
