use tally_common::catalog::Product;
use tally_common::error::CatalogError;

/// Ordered, append-only list of products. Duplicate ids are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two products the catalog demo starts with.
    pub fn demo() -> Result<Self, CatalogError> {
        Ok([
            Product::new(1, "TUXEDO", 1105.0)?,
            Product::new(2, "Neovim", 0.0)?,
        ]
        .into_iter()
        .collect())
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
