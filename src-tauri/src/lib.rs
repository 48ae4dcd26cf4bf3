mod catalog;
mod commands;
mod config;
mod csv_store;
mod error;
mod images;
mod models;
mod pricing;


use catalog::Catalog;
use commands::products;
use config::AppConfig;
use log::{error, info};
use tauri::{Manager, RunEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Load the product list from the data directory
            let config = AppConfig::from_app(app.handle())?;
            info!("Using data directory {}", config.data_dir.display());

            let catalog = Catalog::open(config)?;
            app.manage(catalog);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Products
            products::get_products,
            products::add_product,
            products::delete_product,
            products::sort_products,
            products::save_products,
            // Images
            commands::images::attach_image,
            commands::images::view_image,
            commands::images::add_or_view_image,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app, event| {
        // Persist on close
        if let RunEvent::Exit = event {
            if let Some(catalog) = app.try_state::<Catalog>() {
                if let Err(e) = catalog.save() {
                    error!("Failed to save products on exit: {}", e);
                }
            }
        }
    });
}
