use courier_core::{DomainError, DomainResult, Money};

/// Order line: item code, description, quantity and unit price.
///
/// `total_price` is always `quantity * unit_price`; it is recomputed whenever
/// either factor changes and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    item_code: String,
    description: String,
    quantity: i64,
    unit_price: Money,
    total_price: Money,
}

impl Item {
    pub fn new(
        item_code: impl Into<String>,
        description: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            description: description.into(),
            quantity,
            unit_price,
            total_price: unit_price.times(quantity),
        }
    }

    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn set_item_code(&mut self, item_code: impl Into<String>) {
        self.item_code = item_code.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sign is not checked here; see [`Item::validate_item`].
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.refresh_total();
    }

    pub fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
        self.refresh_total();
    }

    /// Quantity must be positive and the unit price non-negative. Free items
    /// (unit price zero) are valid. A line total too large to hold in fils is
    /// rejected rather than left clamped.
    pub fn validate_item(&self) -> DomainResult<()> {
        if self.quantity <= 0 {
            tracing::debug!(item_code = %self.item_code, quantity = self.quantity, "item quantity is not positive");
            return Err(DomainError::validation("quantity must be positive"));
        }

        if self.unit_price.is_negative() {
            tracing::debug!(item_code = %self.item_code, unit_price = %self.unit_price, "item unit price is negative");
            return Err(DomainError::validation("unit price cannot be negative"));
        }

        if self.unit_price.checked_times(self.quantity).is_none() {
            tracing::debug!(item_code = %self.item_code, quantity = self.quantity, unit_price = %self.unit_price, "item line total overflows");
            return Err(DomainError::validation("line total is out of range"));
        }

        Ok(())
    }

    fn refresh_total(&mut self) {
        self.total_price = self.unit_price.times(self.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Update {
        Quantity(i64),
        UnitPrice(i64),
    }

    fn widget() -> Item {
        Item::new("I1", "Widget", 2, Money::from_aed(10))
    }

    #[test]
    fn new_item_derives_total_price() {
        let item = widget();
        assert_eq!(item.total_price(), Money::from_aed(20));
    }

    #[test]
    fn set_quantity_recomputes_total() {
        let mut item = widget();
        item.set_quantity(5);
        assert_eq!(item.quantity(), 5);
        assert_eq!(item.total_price(), Money::from_aed(50));
    }

    #[test]
    fn set_unit_price_recomputes_total() {
        let mut item = widget();
        item.set_unit_price(Money::from_fils(1250));
        assert_eq!(item.total_price(), Money::from_aed(25));
    }

    #[test]
    fn setters_do_not_validate() {
        let mut item = widget();
        item.set_quantity(-3);
        assert_eq!(item.total_price(), Money::from_aed(-30));
        assert!(item.validate_item().is_err());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let item = Item::new("I1", "Widget", 0, Money::from_aed(10));
        match item.validate_item().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
            other => panic!("Expected Validation error for zero quantity, got {other:?}"),
        }
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let item = Item::new("I1", "Widget", 1, Money::from_fils(-1));
        match item.validate_item().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("unit price cannot be negative") => {}
            other => panic!("Expected Validation error for negative price, got {other:?}"),
        }
    }

    #[test]
    fn free_item_is_valid() {
        let item = Item::new("GIFT", "Sample pack", 1, Money::ZERO);
        assert_eq!(item.validate_item(), Ok(()));
        assert_eq!(item.total_price(), Money::ZERO);
    }

    #[test]
    fn overflowing_line_total_is_rejected() {
        let item = Item::new("BULK", "Pallet", i64::MAX, Money::from_aed(2));
        assert_eq!(item.total_price(), Money::from_fils(i64::MAX));
        match item.validate_item().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("line total is out of range") => {}
            other => panic!("Expected Validation error for overflowing total, got {other:?}"),
        }
    }

    #[test]
    fn code_and_description_are_mutable() {
        let mut item = widget();
        item.set_item_code("I9");
        item.set_description("Widget XL");
        assert_eq!(item.item_code(), "I9");
        assert_eq!(item.description(), "Widget XL");
        assert_eq!(item.total_price(), Money::from_aed(20));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of setter calls the total equals
        /// quantity times unit price.
        #[test]
        fn total_tracks_factors(
            updates in prop::collection::vec(
                prop_oneof![
                    (-1_000i64..1_000i64).prop_map(Update::Quantity),
                    (-1_000_000i64..1_000_000i64).prop_map(Update::UnitPrice),
                ],
                0..16,
            )
        ) {
            let mut item = widget();
            for update in updates {
                match update {
                    Update::Quantity(quantity) => item.set_quantity(quantity),
                    Update::UnitPrice(fils) => item.set_unit_price(Money::from_fils(fils)),
                }
                prop_assert_eq!(
                    item.total_price().fils(),
                    item.quantity() * item.unit_price().fils()
                );
            }
        }

        /// Property: validation accepts exactly positive quantities with
        /// non-negative prices.
        #[test]
        fn validation_matches_rule(quantity in -50i64..50i64, fils in -5_000i64..5_000i64) {
            let item = Item::new("P", "Prop", quantity, Money::from_fils(fils));
            prop_assert_eq!(item.validate_item().is_ok(), quantity > 0 && fils >= 0);
        }
    }
}
