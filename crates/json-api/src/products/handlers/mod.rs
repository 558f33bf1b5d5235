//! Product Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::models::Product;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub product_id: i64,

    pub name: String,

    pub code: String,

    pub description: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Units available for checkout
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id.into_i64(),
            name: product.name,
            code: product.code,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// Product create and update payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    pub name: String,

    pub code: String,

    #[serde(default)]
    pub description: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use storefront_app::domain::products::models::ProductId;

    use super::*;

    pub(super) fn make_product(id: i64, stock: u32) -> Product {
        Product {
            product_id: ProductId::from_i64(id),
            name: "Desk Lamp".to_string(),
            code: format!("LAMP-{id}"),
            description: "Adjustable".to_string(),
            price: Decimal::new(2500, 2),
            stock,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
