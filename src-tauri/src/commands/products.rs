use crate::catalog::CatalogExt;
use crate::error::AppError;
use crate::models::{NewProduct, ProductRecord, ProductRow, SortColumn};
use tauri::AppHandle;

#[tauri::command]
pub fn get_products(app: AppHandle) -> Result<Vec<ProductRow>, String> {
    Ok(app.catalog().rows())
}

#[tauri::command]
pub fn add_product(app: AppHandle, product: NewProduct) -> Result<ProductRecord, String> {
    app.catalog().add(product).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_product(app: AppHandle, name: String) -> Result<(), String> {
    if !app.catalog().delete(&name) {
        return Err(AppError::ProductNotFound(name).to_string());
    }

    Ok(())
}

#[tauri::command]
pub fn sort_products(app: AppHandle, column: SortColumn) -> Result<Vec<ProductRow>, String> {
    let catalog = app.catalog();
    catalog.sort(column);

    Ok(catalog.rows())
}

#[tauri::command]
pub fn save_products(app: AppHandle) -> Result<(), String> {
    app.catalog().save().map_err(|e| e.to_string())
}
