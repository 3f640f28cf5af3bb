pub mod aggregate;

pub use aggregate::{ProductSale, TOP_SELLING_PRODUCTS};
