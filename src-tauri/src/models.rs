use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub sale_price_total: String,
    pub purchase_cost_total: String,
    pub profit_20: String,
    pub profit_40: String,
    pub profit_60: String,
    pub image_path: Option<String>,
}

impl ProductRecord {
    pub fn new(name: String, prices: PriceBreakdown) -> Self {
        ProductRecord {
            name,
            sale_price_total: prices.sale_price_total,
            purchase_cost_total: prices.purchase_cost_total,
            profit_20: prices.profit_20,
            profit_40: prices.profit_40,
            profit_60: prices.profit_60,
            image_path: None,
        }
    }

    pub fn field(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Name => &self.name,
            SortColumn::SalePriceTotal => &self.sale_price_total,
            SortColumn::PurchaseCostTotal => &self.purchase_cost_total,
            SortColumn::Profit20 => &self.profit_20,
            SortColumn::Profit40 => &self.profit_40,
            SortColumn::Profit60 => &self.profit_60,
        }
    }
}

/// The five figures derived from a sale price and quantity, already
/// formatted to two decimal places.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub sale_price_total: String,
    pub purchase_cost_total: String,
    pub profit_20: String,
    pub profit_40: String,
    pub profit_60: String,
}

/// Raw form input; price and quantity are parsed by the catalog.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductRow {
    #[serde(flatten)]
    pub record: ProductRecord,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    SalePriceTotal,
    PurchaseCostTotal,
    Profit20,
    Profit40,
    Profit60,
}

impl SortColumn {
    pub fn is_numeric(self) -> bool {
        !matches!(self, SortColumn::Name)
    }
}
