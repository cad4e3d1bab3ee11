use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use courier_core::Money;

use crate::customer::SharedCustomer;
use crate::item::Item;

/// Order handle shared between the caller and the delivery fulfilling it.
///
/// Both sides must observe the same live status, so the delivery holds a
/// back-reference rather than its own copy.
pub type SharedOrder = Rc<RefCell<Order>>;

/// Fulfillment stage of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl OrderStatus {
    /// Next stage along `Pending -> In Transit -> Delivered`.
    ///
    /// `Delivered` is terminal and maps to itself.
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Pending => OrderStatus::InTransit,
            OrderStatus::InTransit => OrderStatus::Delivered,
            OrderStatus::Delivered => OrderStatus::Delivered,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's order: header fields, line items and fulfillment status.
#[derive(Debug, Clone)]
pub struct Order {
    order_number: String,
    reference_number: String,
    delivery_date: NaiveDate,
    customer: SharedCustomer,
    items: Vec<Item>,
    status: OrderStatus,
}

impl Order {
    /// New order in `Pending` status. Items keep their insertion order and
    /// duplicates are allowed.
    pub fn new(
        order_number: impl Into<String>,
        reference_number: impl Into<String>,
        delivery_date: NaiveDate,
        customer: SharedCustomer,
        items: Vec<Item>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            reference_number: reference_number.into(),
            delivery_date,
            customer,
            items,
            status: OrderStatus::Pending,
        }
    }

    /// Wrap the order in a handle that deliveries can share.
    pub fn into_shared(self) -> SharedOrder {
        Rc::new(RefCell::new(self))
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    pub fn customer(&self) -> &SharedCustomer {
        &self.customer
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_order_number(&mut self, order_number: impl Into<String>) {
        self.order_number = order_number.into();
    }

    pub fn set_reference_number(&mut self, reference_number: impl Into<String>) {
        self.reference_number = reference_number.into();
    }

    pub fn set_delivery_date(&mut self, delivery_date: NaiveDate) {
        self.delivery_date = delivery_date;
    }

    pub fn set_customer(&mut self, customer: SharedCustomer) {
        self.customer = customer;
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Any status may be assigned directly; only
    /// [`Delivery::update_status`](crate::Delivery::update_status) follows the
    /// stage sequence.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Sum of the items' total prices, recomputed on every call.
    pub fn calculate_total(&self) -> Money {
        self.items.iter().map(Item::total_price).sum()
    }
}
