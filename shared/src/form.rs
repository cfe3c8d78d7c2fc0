//! Contact details form and validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The five free-text inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Address,
    Phone,
    Notes,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Address,
        ContactField::Phone,
        ContactField::Notes,
    ];

    /// Matches the `name` attribute of the rendered input
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Address => "address",
            ContactField::Phone => "phone",
            ContactField::Notes => "notes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// Anything a validation message can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Contact(ContactField),
    Date,
    Time,
}

impl From<ContactField> for BookingField {
    fn from(field: ContactField) -> Self {
        BookingField::Contact(field)
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BookingField::Contact(field) => write!(f, "{}", field.as_str()),
            BookingField::Date => write!(f, "date"),
            BookingField::Time => write!(f, "time"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub notes: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Address => &self.address,
            ContactField::Phone => &self.phone,
            ContactField::Notes => &self.notes,
        }
    }

    /// Copy of the form with exactly one field replaced
    pub fn with(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut form = self.clone();
        let slot = match field {
            ContactField::Name => &mut form.name,
            ContactField::Email => &mut form.email,
            ContactField::Address => &mut form.address,
            ContactField::Phone => &mut form.phone,
            ContactField::Notes => &mut form.notes,
        };
        *slot = value.into();
        form
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Field-to-message map shown inline next to each input or section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<BookingField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<BookingField>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: impl Into<BookingField>) -> Option<&str> {
        self.errors.get(&field.into()).map(String::as_str)
    }

    /// Copy without the error for `field`; other errors are kept
    pub fn without(&self, field: impl Into<BookingField>) -> Self {
        let mut errors = self.clone();
        errors.errors.remove(&field.into());
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_updates_exactly_one_field() {
        let form = ContactForm::default().with(ContactField::Email, "jane@example.com");
        assert_eq!(form.email, "jane@example.com");
        assert_eq!(form.name, "");

        let form = form.with(ContactField::Notes, "Side door");
        assert_eq!(form.get(ContactField::Notes), "Side door");
        assert_eq!(form.get(ContactField::Email), "jane@example.com");
    }

    #[test]
    fn test_has_name_trims_whitespace() {
        assert!(!ContactForm::default().has_name());
        assert!(!ContactForm::default().with(ContactField::Name, "   \t").has_name());
        assert!(ContactForm::default().with(ContactField::Name, " Jane ").has_name());
    }

    #[test]
    fn test_field_names_round_trip_through_input_names() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::from_name("date"), None);
    }

    #[test]
    fn test_without_keeps_other_errors() {
        let mut errors = ValidationErrors::new();
        errors.insert(ContactField::Name, "Name is required");
        errors.insert(BookingField::Date, "Please select a date");

        let cleared = errors.without(ContactField::Email);
        assert_eq!(cleared, errors);

        let cleared = errors.without(ContactField::Name);
        assert_eq!(cleared.get(ContactField::Name), None);
        assert_eq!(cleared.get(BookingField::Date), Some("Please select a date"));
        assert_eq!(cleared.len(), 1);
    }

    #[test]
    fn test_booking_field_display() {
        assert_eq!(BookingField::from(ContactField::Phone).to_string(), "phone");
        assert_eq!(BookingField::Time.to_string(), "time");
    }
}
