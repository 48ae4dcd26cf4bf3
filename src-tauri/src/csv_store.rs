use crate::error::{AppError, Result};
use crate::models::ProductRecord;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "Name",
    "Sale Price Total",
    "Purchase Cost Total",
    "Profit20",
    "Profit40",
    "Profit60",
    "ImagePath",
];

/// Reads the product list by column position, so files saved with other
/// header captions still load.
pub fn read_products(path: &Path) -> Result<Vec<ProductRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut products = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() < 6 {
            return Err(AppError::InvalidFormat(format!(
                "row {} has {} columns, expected at least 6",
                index + 1,
                row.len()
            )));
        }

        let image_path = row
            .get(6)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        products.push(ProductRecord {
            name: row[0].to_string(),
            sale_price_total: row[1].to_string(),
            purchase_cost_total: row[2].to_string(),
            profit_20: row[3].to_string(),
            profit_40: row[4].to_string(),
            profit_60: row[5].to_string(),
            image_path,
        });
    }

    Ok(products)
}

/// Overwrites `path` with the full list. Rows are written to a sibling
/// temporary file first and renamed into place.
pub fn write_products(path: &Path, products: &[ProductRecord]) -> Result<()> {
    let tmp_path = path.with_extension("csv.tmp");

    {
        let mut writer = csv::Writer::from_path(&tmp_path)?;
        writer.write_record(HEADER)?;
        for product in products {
            writer.write_record([
                product.name.as_str(),
                product.sale_price_total.as_str(),
                product.purchase_cost_total.as_str(),
                product.profit_20.as_str(),
                product.profit_40.as_str(),
                product.profit_60.as_str(),
                product.image_path.as_deref().unwrap_or(""),
            ])?;
        }
        writer.flush()?;
    }

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
