use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter valid values for price and quantity")]
    InvalidInput,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("No image attached to {0}")]
    NoImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
