//! Delivery note rendering.
//!
//! The note is a fixed-layout plain-text receipt. All charge figures are
//! supplied by the caller; nothing is recomputed from the order, so discounts
//! and taxes can be applied before rendering.

use core::fmt;

use courier_core::{CURRENCY_CODE, Money};

use crate::customer::Customer;
use crate::delivery::Delivery;
use crate::order::Order;

const GREETING: &str = "Thank you for using our delivery service! Please print your delivery receipt and present it upon receiving your items.";
const ITEMS_HEADER: &str =
    "| Item Code | Description                 | Quantity | Unit Price (AED) | Total Price (AED) |";
const ITEMS_RULE: &str =
    "|-----------|-----------------------------|----------|------------------|-------------------|";

/// Charge figures printed at the bottom of the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charges {
    pub subtotal: Money,
    pub taxes_and_fees: Money,
    pub total_charges: Money,
}

impl Charges {
    pub fn new(subtotal: Money, taxes_and_fees: Money, total_charges: Money) -> Self {
        Self {
            subtotal,
            taxes_and_fees,
            total_charges,
        }
    }

    /// Charges with no taxes or fees: the total is the subtotal.
    pub fn untaxed(subtotal: Money) -> Self {
        Self::new(subtotal, Money::ZERO, subtotal)
    }
}

/// Borrowed view of everything a delivery note prints.
///
/// Rendering happens through `Display`, so the note can be written straight to
/// any formatter or collected with `to_string()`.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryNote<'a> {
    customer: &'a Customer,
    order: &'a Order,
    delivery: &'a Delivery,
    charges: &'a Charges,
}

impl<'a> DeliveryNote<'a> {
    pub fn new(
        customer: &'a Customer,
        order: &'a Order,
        delivery: &'a Delivery,
        charges: &'a Charges,
    ) -> Self {
        Self {
            customer,
            order,
            delivery,
            charges,
        }
    }
}

impl fmt::Display for DeliveryNote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DeliveryNote {
            customer,
            order,
            delivery,
            charges,
        } = self;

        writeln!(f, "Delivery Note")?;
        writeln!(f, "{GREETING}")?;
        writeln!(f)?;

        writeln!(f, "Recipient Details:")?;
        writeln!(f, "Name: {}", customer.name())?;
        writeln!(f, "Contact: {}", customer.email())?;
        writeln!(f, "Delivery Address: {}", customer.address())?;
        writeln!(f)?;

        writeln!(f, "Delivery Information:")?;
        writeln!(f, "Order Number: {}", order.order_number())?;
        writeln!(f, "Reference Number: {}", order.reference_number())?;
        writeln!(f, "Delivery Date: {}", order.delivery_date().format("%Y-%m-%d"))?;
        writeln!(f, "Delivery Method: {}", delivery.method())?;
        writeln!(f, "Package Dimensions: {}", delivery.dimensions())?;
        writeln!(f, "Package Weight: {:.2} kg", delivery.weight_kg())?;
        writeln!(f)?;

        writeln!(f, "Summary of Items Delivered:")?;
        writeln!(f, "{ITEMS_HEADER}")?;
        writeln!(f, "{ITEMS_RULE}")?;
        for item in order.items() {
            writeln!(
                f,
                "| {} | {:<23} | {} | {:>14} | {:>15} |",
                item.item_code(),
                item.description(),
                item.quantity(),
                item.unit_price(),
                item.total_price(),
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Subtotal: {CURRENCY_CODE} {}", charges.subtotal)?;
        writeln!(f, "Taxes and Fees: {CURRENCY_CODE} {}", charges.taxes_and_fees)?;
        writeln!(f, "Total Charges: {CURRENCY_CODE} {}", charges.total_charges)
    }
}

/// Render the delivery note for one order as text.
pub fn render_delivery_note(
    customer: &Customer,
    order: &Order,
    delivery: &Delivery,
    charges: &Charges,
) -> String {
    DeliveryNote::new(customer, order, delivery, charges).to_string()
}
