//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::products::models::ProductId;

/// Cart Model
///
/// Lines are unique by product and kept in the order they were first added.
/// Serialized as a bare JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over every line.
    ///
    /// `None` when the sum does not fit an order amount.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| {
                total.checked_add(line.line_total()?)
            })
            .filter(|total| *total <= max_amount())
    }

    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product)
    }

    pub(crate) fn line_mut(&mut self, product: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product)
    }

    /// Drop the line for `product`, returning whether one was present.
    pub(crate) fn remove(&mut self, product: ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_id != product);

        self.lines.len() != before
    }
}

/// CartLine Model
///
/// `price` is the unit price captured when the product was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// `None` when `price × quantity` does not fit an order amount.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .filter(|total| *total <= max_amount())
    }
}

/// Largest value a `NUMERIC(18, 2)` column holds.
fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999_999_999, 2)
}

/// A price is storable when it is non-negative, has at most two decimal
/// places and fits a `NUMERIC(18, 2)` column.
#[must_use]
pub fn is_valid_price(price: Decimal) -> bool {
    !price.is_sign_negative() && price.normalize().scale() <= 2 && price <= max_amount()
}

impl From<NewCartLine> for CartLine {
    fn from(line: NewCartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// New CartLine Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}
