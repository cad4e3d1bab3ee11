//! Delivery-order domain module.
//!
//! Customers, line items, orders and deliveries, plus the delivery-note
//! renderer. Pure in-memory domain logic (no IO, no storage).

pub mod customer;
pub mod delivery;
pub mod item;
pub mod note;
pub mod order;

pub use customer::{Customer, SharedCustomer};
pub use delivery::Delivery;
pub use item::Item;
pub use note::{Charges, DeliveryNote, render_delivery_note};
pub use order::{Order, OrderStatus, SharedOrder};
