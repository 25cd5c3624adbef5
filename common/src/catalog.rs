use std::fmt;

use crate::error::CatalogError;

/// An immutable catalog entry. Build one with [`Product::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: i64,
    title: String,
    price: f64,
}

impl Product {
    /// Creates a product, rejecting blank titles and prices that are negative
    /// or not finite. Ids are not checked for uniqueness.
    pub fn new(id: i64, title: impl Into<String>, price: f64) -> Result<Self, CatalogError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { id });
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::InvalidPrice { id, price });
        }
        Ok(Self { id, title, price })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ${:.2}", self.id, self.title, self.price)
    }
}
