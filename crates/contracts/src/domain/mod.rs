pub mod activity;
pub mod order;
pub mod product;
