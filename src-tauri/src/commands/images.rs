use crate::catalog::CatalogExt;
use crate::error::AppError;
use crate::images::IMAGE_EXTENSIONS;
use crate::models::ProductRow;
use log::info;
use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;
use tauri_plugin_opener::OpenerExt;

// Async so the blocking file dialog stays off the main thread.
#[tauri::command]
pub async fn attach_image(app: AppHandle, name: String) -> Result<Option<ProductRow>, String> {
    // Fail before showing the dialog if the product is gone
    app.catalog().image_path(&name).map_err(|e| e.to_string())?;

    let picked = app
        .dialog()
        .file()
        .set_title("Choose a product photo")
        .add_filter("Image files", &IMAGE_EXTENSIONS)
        .blocking_pick_file();

    let Some(picked) = picked else {
        info!("Image selection for {:?} cancelled", name);
        return Ok(None);
    };
    let source = picked.into_path().map_err(|e| e.to_string())?;

    let catalog = app.catalog();
    let record = catalog
        .attach_image(&name, &source)
        .map_err(|e| e.to_string())?;

    Ok(Some(catalog.row(record)))
}

#[tauri::command]
pub fn view_image(app: AppHandle, name: String) -> Result<(), String> {
    let path = app
        .catalog()
        .image_path(&name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| AppError::NoImage(name).to_string())?;

    app.opener()
        .open_path(path.to_string_lossy().into_owned(), None::<&str>)
        .map_err(|e| e.to_string())
}

/// Double-click action on a table row: show the photo if there is one,
/// otherwise ask for one.
#[tauri::command]
pub async fn add_or_view_image(app: AppHandle, name: String) -> Result<Option<ProductRow>, String> {
    let existing = app.catalog().image_path(&name).map_err(|e| e.to_string())?;

    match existing {
        Some(_) => view_image(app, name).map(|_| None),
        None => attach_image(app, name).await,
    }
}
