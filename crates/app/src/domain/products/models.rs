//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub code: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
}

/// Product Update Model
///
/// Replaces every mutable field; stock here is an absolute level, not a delta.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub code: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
}

impl From<Product> for ProductUpdate {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            code: product.code,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}
