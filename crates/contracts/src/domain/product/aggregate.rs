use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A row of the "Top Selling Products" dashboard table. Values are
/// pre-formatted display strings; the table does no arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSale {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub amount: String,
}

impl ProductSale {
    fn new(name: &str, price: &str, quantity: u32, amount: &str) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity,
            amount: amount.into(),
        }
    }
}

pub static TOP_SELLING_PRODUCTS: Lazy<Vec<ProductSale>> = Lazy::new(|| {
    vec![
        ProductSale::new("ASOS Ripped Skinny Jeans", "$79.49", 82, "$6,518.18"),
        ProductSale::new("Marco Lightweight Shirt", "$128.50", 37, "$4,754.50"),
        ProductSale::new("Half Sleeve Shirt", "$39.99", 64, "$2,559.36"),
        ProductSale::new("Lightweight Jacket", "$20.00", 184, "$3,680.00"),
        ProductSale::new("Marco Shoes", "$79.49", 64, "$1,965.81"),
    ]
});
