pub mod aggregate;
pub mod fixtures;
pub mod pipeline;

pub use aggregate::{Order, OrderDraft, OrderId, OrderStatus, UserRef};
