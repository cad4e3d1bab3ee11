//! `courier-note`: render a delivery note from a JSON order document.

pub mod config;
pub mod dto;

use std::fs;

use anyhow::Context;

use courier_core::Money;
use courier_delivery::{Charges, render_delivery_note};

use crate::config::Config;
use crate::dto::{OrderDocument, Shipment};

/// Load the configured document and render its delivery note.
pub fn run(config: &Config) -> anyhow::Result<String> {
    let json = fs::read_to_string(&config.order_file)
        .with_context(|| format!("failed to read {}", config.order_file.display()))?;
    render_document(&json, config.advance_status)
}

/// Parse, validate and render one document.
///
/// `advance_status` delivery status updates are applied before rendering.
/// When the document carries no charges, the subtotal and total are the
/// order total and taxes are zero.
pub fn render_document(json: &str, advance_status: u32) -> anyhow::Result<String> {
    let document = OrderDocument::from_json(json).context("invalid order document")?;
    let Shipment {
        customer,
        order,
        delivery,
        charges,
    } = document
        .into_shipment()
        .context("invalid amount in order document")?;

    customer
        .borrow()
        .validate_order()
        .context("customer details are incomplete")?;
    for item in order.borrow().items() {
        item.validate_item()
            .with_context(|| format!("item {} is invalid", item.item_code()))?;
    }

    order
        .borrow()
        .items()
        .iter()
        .try_fold(Money::ZERO, |total, item| total.checked_add(item.total_price()))
        .context("order total is out of range")?;

    for _ in 0..advance_status {
        delivery
            .update_status()
            .context("cannot advance delivery status")?;
    }

    let order = order.borrow();
    let charges = charges.unwrap_or_else(|| Charges::untaxed(order.calculate_total()));

    tracing::info!(
        order_number = %order.order_number(),
        status = %order.status(),
        items = order.items().len(),
        total_charges = %charges.total_charges,
        "rendering delivery note"
    );

    Ok(render_delivery_note(
        &customer.borrow(),
        &order,
        &delivery,
        &charges,
    ))
}
