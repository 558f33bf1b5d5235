//! Test Helpers

use rust_decimal::Decimal;

use crate::domain::{
    carts::models::NewCartLine,
    customers::models::NewCustomer,
    products::models::{NewProduct, ProductId},
};

pub(crate) fn new_product(code: &str, price: Decimal, stock: u32) -> NewProduct {
    NewProduct {
        name: format!("Product {code}"),
        code: code.to_string(),
        description: String::new(),
        price,
        stock,
    }
}

pub(crate) fn new_customer(email: &str) -> NewCustomer {
    NewCustomer {
        name: "Test Customer".to_string(),
        email: email.to_string(),
    }
}

pub(crate) fn new_cart_line(product: i64, price: Decimal, quantity: u32) -> NewCartLine {
    NewCartLine {
        product_id: ProductId::from_i64(product),
        name: format!("Product {product}"),
        price,
        quantity,
    }
}
