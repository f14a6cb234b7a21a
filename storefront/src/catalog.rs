//! Product catalog
//!
//! The storefront sells from a fixed list. The built-in list is used unless a
//! replacement JSON file is configured; either way the catalog is immutable
//! once loaded.

use rust_decimal::Decimal;
use shared::{AppError, AppResult, ErrorCode, Product};
use std::collections::HashSet;
use std::path::Path;

/// Immutable, ordered list of purchasable products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices
    pub fn new(products: Vec<Product>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(AppError::invalid_catalog(format!(
                    "Duplicate product id {}",
                    product.id
                ))
                .with_detail("product_id", product.id));
            }
            if product.price < Decimal::ZERO {
                return Err(AppError::invalid_catalog(format!(
                    "Product '{}' has a negative price",
                    product.name
                ))
                .with_detail("product_id", product.id));
            }
        }
        Ok(Self { products })
    }

    /// The storefront's own four flavors
    pub fn builtin() -> Self {
        let product = |id: u32, name: &str, description: &str, price: Decimal, image: &str| Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_url: image.to_string(),
        };

        Self {
            products: vec![
                product(
                    1,
                    "Lemon & Ginger",
                    "A zesty and spicy kick to invigorate your senses.",
                    Decimal::new(3700, 2),
                    "https://i.imgur.com/gJt2fUJ.jpeg",
                ),
                product(
                    2,
                    "Mango",
                    "Sweet tropical mango flavor for a taste of sunshine.",
                    Decimal::new(3700, 2),
                    "https://i.imgur.com/GgQNB6a.jpeg",
                ),
                product(
                    3,
                    "Apple",
                    "Crisp and refreshing, like a bite of a fresh apple.",
                    Decimal::new(3700, 2),
                    "https://i.imgur.com/7SyVd0T.jpeg",
                ),
                product(
                    4,
                    "Try them all",
                    "A variety pack to discover your favorite flavor.",
                    Decimal::new(10000, 2),
                    "https://i.imgur.com/gKEMc3m.jpeg",
                ),
            ],
        }
    }

    /// Parse a JSON array of products
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json).map_err(|e| {
            AppError::with_message(
                ErrorCode::CatalogLoadFailed,
                format!("Invalid catalog JSON: {}", e),
            )
        })?;
        Self::new(products)
    }

    /// Load a replacement catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::CatalogLoadFailed,
                format!("Cannot read catalog {}: {}", path.display(), e),
            )
            .with_detail("path", path.display().to_string())
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Use the configured catalog file if there is one, else the built-in list
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`] but reports a missing id as an error
    pub fn require(&self, id: u32) -> AppResult<&Product> {
        self.get(id).ok_or_else(|| AppError::product_not_found(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
