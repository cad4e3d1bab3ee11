//! JSON order document accepted by `courier-note`, and its mapping onto the
//! domain graph.

use std::rc::Rc;

use chrono::NaiveDate;
use serde::Deserialize;

use courier_core::{DomainResult, Money};
use courier_delivery::{
    Charges, Customer, Delivery, Item, Order, OrderStatus, SharedCustomer, SharedOrder,
};

// -------------------------
// Document DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct OrderDocument {
    pub customer: CustomerDocument,
    pub order: OrderSection,
    pub delivery: DeliverySection,
    #[serde(default)]
    pub charges: Option<ChargesSection>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerDocument {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderSection {
    pub order_number: String,
    pub reference_number: String,
    pub delivery_date: NaiveDate,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
}

#[derive(Debug, Deserialize)]
pub struct ItemDocument {
    pub item_code: String,
    pub description: String,
    pub quantity: i64,
    pub unit_price: Amount,
}

#[derive(Debug, Deserialize)]
pub struct DeliverySection {
    pub method: String,
    pub dimensions: String,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(default)]
    pub tracking_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChargesSection {
    pub subtotal: Amount,
    pub taxes_and_fees: Amount,
    pub total_charges: Amount,
}

/// A decimal AED amount written either as a string (`"26.25"`) or a JSON
/// number (`26.25`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
}

impl Amount {
    pub fn to_money(&self) -> DomainResult<Money> {
        match self {
            Amount::Text(text) => text.parse(),
            // `Display` for f64 prints the shortest form that round-trips,
            // so 1.25 becomes "1.25" rather than a binary expansion.
            Amount::Number(value) => value.to_string().parse(),
        }
    }
}

// -------------------------
// Mapping to the domain
// -------------------------

/// Domain graph built from one document.
#[derive(Debug)]
pub struct Shipment {
    pub customer: SharedCustomer,
    pub order: SharedOrder,
    pub delivery: Delivery,
    /// Charges from the document, if it had any.
    pub charges: Option<Charges>,
}

impl OrderDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build the customer, order and delivery. Only amounts are checked here;
    /// business validation is left to the caller.
    pub fn into_shipment(self) -> DomainResult<Shipment> {
        let OrderDocument {
            customer,
            order,
            delivery,
            charges,
        } = self;

        let mut domain_customer = Customer::new(customer.name, customer.email, customer.address);
        if let Some(phone) = customer.phone {
            domain_customer = domain_customer.with_phone(phone);
        }
        if let Some(customer_id) = customer.customer_id {
            domain_customer = domain_customer.with_customer_id(customer_id);
        }
        let shared_customer = domain_customer.into_shared();

        let items = order
            .items
            .into_iter()
            .map(|item| -> DomainResult<Item> {
                Ok(Item::new(
                    item.item_code,
                    item.description,
                    item.quantity,
                    item.unit_price.to_money()?,
                ))
            })
            .collect::<DomainResult<Vec<Item>>>()?;

        let mut domain_order = Order::new(
            order.order_number,
            order.reference_number,
            order.delivery_date,
            Rc::clone(&shared_customer),
            items,
        );
        if let Some(status) = order.status {
            domain_order.set_status(status);
        }
        let shared_order = domain_order.into_shared();

        let mut domain_delivery = Delivery::new(
            delivery.method,
            delivery.dimensions,
            delivery.weight_kg,
            Rc::clone(&shared_order),
        );
        domain_delivery.set_tracking_number(delivery.tracking_number);

        let charges = charges
            .map(|c| -> DomainResult<Charges> {
                Ok(Charges::new(
                    c.subtotal.to_money()?,
                    c.taxes_and_fees.to_money()?,
                    c.total_charges.to_money()?,
                ))
            })
            .transpose()?;

        Ok(Shipment {
            customer: shared_customer,
            order: shared_order,
            delivery: domain_delivery,
            charges,
        })
    }
}
