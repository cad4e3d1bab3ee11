use courier_core::{DomainError, DomainResult};

use crate::order::{OrderStatus, SharedOrder};

/// Shipping record fulfilling one order.
///
/// A delivery has no status of its own: progress is recorded on the
/// referenced order, which the caller may also hold.
#[derive(Debug, Clone)]
pub struct Delivery {
    method: String,
    dimensions: String,
    weight_kg: f64,
    order: SharedOrder,
    tracking_number: Option<String>,
}

impl Delivery {
    pub fn new(
        method: impl Into<String>,
        dimensions: impl Into<String>,
        weight_kg: f64,
        order: SharedOrder,
    ) -> Self {
        Self {
            method: method.into(),
            dimensions: dimensions.into(),
            weight_kg,
            order,
            tracking_number: None,
        }
    }

    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn order(&self) -> &SharedOrder {
        &self.order
    }

    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }

    pub fn set_dimensions(&mut self, dimensions: impl Into<String>) {
        self.dimensions = dimensions.into();
    }

    pub fn set_weight_kg(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
    }

    pub fn set_order(&mut self, order: SharedOrder) {
        self.order = order;
    }

    pub fn set_tracking_number(&mut self, tracking_number: Option<String>) {
        self.tracking_number = tracking_number;
    }

    /// Advance the referenced order one stage and return the new status.
    ///
    /// Requires a non-empty tracking number. `Delivered` stays `Delivered`.
    pub fn update_status(&self) -> DomainResult<OrderStatus> {
        let Some(tracking_number) = self
            .tracking_number()
            .filter(|tracking| !tracking.is_empty())
        else {
            tracing::debug!(method = %self.method, "status update rejected: no tracking number");
            return Err(DomainError::validation(
                "tracking number is required to update status",
            ));
        };

        let mut order = self.order.borrow_mut();
        let from = order.status();
        if from.is_terminal() {
            tracing::debug!(order_number = %order.order_number(), "order already delivered");
        }
        let to = from.next();
        order.set_status(to);

        tracing::info!(
            order_number = %order.order_number(),
            tracking_number = %tracking_number,
            from = %from,
            to = %to,
            "delivery status advanced"
        );

        Ok(to)
    }
}
