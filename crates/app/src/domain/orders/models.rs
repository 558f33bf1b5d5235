//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{customers::models::CustomerId, products::models::ProductId},
    ids::TypedId,
};

/// Order ID
pub type OrderId = TypedId<Order>;

/// Order Model
///
/// Immutable once committed. `total_amount` equals the sum of the line totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub order_date: Timestamp,
    pub total_amount: Decimal,
    pub lines: Vec<OrderLine>,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub total_amount: Decimal,
}

/// OrderLine Model
///
/// Snapshot of one product's quantity and price at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// New OrderLine Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub line_number: u32,
    pub quantity: u32,
    pub line_total: Decimal,
}
