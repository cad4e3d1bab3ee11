use std::cell::RefCell;
use std::rc::Rc;

use courier_core::{DomainError, DomainResult};

/// Customer handle shared between the caller and the orders placed for them.
pub type SharedCustomer = Rc<RefCell<Customer>>;

/// Contact and address record of the customer placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    email: String,
    address: String,
    phone: Option<String>,
    customer_id: Option<String>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            phone: None,
            customer_id: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Wrap the customer in a handle that orders can share.
    pub fn into_shared(self) -> SharedCustomer {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    pub fn set_customer_id(&mut self, customer_id: Option<String>) {
        self.customer_id = customer_id;
    }

    /// Check that the customer can receive an order.
    ///
    /// Name, email and address must be non-empty, and the email must contain
    /// an `@`. Phone and customer id are optional and never checked.
    pub fn validate_order(&self) -> DomainResult<()> {
        if self.name.is_empty() || self.email.is_empty() || self.address.is_empty() {
            tracing::debug!(customer_id = ?self.customer_id, "customer is missing required fields");
            return Err(DomainError::validation(
                "customer name, email, and address must not be empty",
            ));
        }

        if !self.email.contains('@') {
            tracing::debug!(email = %self.email, "customer email is malformed");
            return Err(DomainError::validation("invalid email format"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Customer {
        Customer::new("Jane Doe", "jane@x.com", "123 Main St")
    }

    fn assert_validation_error(customer: &Customer, expected: &str) {
        match customer.validate_order() {
            Err(DomainError::Validation(msg)) if msg.contains(expected) => {}
            other => panic!("Expected Validation error containing {expected:?}, got {other:?}"),
        }
    }

    #[test]
    fn well_formed_customer_validates() {
        assert_eq!(jane().validate_order(), Ok(()));
    }

    #[test]
    fn optional_fields_do_not_affect_validation() {
        let customer = jane().with_phone("+971 50 000 0000").with_customer_id("C-001");
        assert_eq!(customer.validate_order(), Ok(()));
        assert_eq!(customer.phone(), Some("+971 50 000 0000"));
        assert_eq!(customer.customer_id(), Some("C-001"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut customer = jane();
        customer.set_name("");
        assert_validation_error(&customer, "must not be empty");
    }

    #[test]
    fn empty_email_is_rejected() {
        let mut customer = jane();
        customer.set_email("");
        assert_validation_error(&customer, "must not be empty");
    }

    #[test]
    fn empty_address_is_rejected() {
        let mut customer = jane();
        customer.set_address("");
        assert_validation_error(&customer, "must not be empty");
    }

    #[test]
    fn whitespace_only_fields_are_not_empty() {
        let customer = Customer::new("   ", "@", " ");
        assert_eq!(customer.validate_order(), Ok(()));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut customer = jane();
        customer.set_email("jane.x.com");
        assert_validation_error(&customer, "invalid email format");
    }

    #[test]
    fn setters_replace_fields() {
        let mut customer = jane();
        customer.set_address("9 Side Rd");
        customer.set_phone(Some("555".to_string()));
        customer.set_phone(None);
        assert_eq!(customer.address(), "9 Side Rd");
        assert_eq!(customer.phone(), None);
    }

    #[test]
    fn shared_handle_observes_mutation() {
        let shared = jane().into_shared();
        let other = Rc::clone(&shared);
        other.borrow_mut().set_name("Janet Doe");
        assert_eq!(shared.borrow().name(), "Janet Doe");
    }
}
