use crate::form::ContactForm;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Payload of a successful, validated booking submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub year: i32,
    pub month: u32,
    /// Day of month
    pub date: u32,
    pub time: String,
    #[serde(flatten)]
    pub contact: ContactForm,
}

/// Collaborator that receives confirmed bookings.
///
/// Persistence or notification backends plug in here; the widget itself
/// only reports.
pub trait ConfirmationSink {
    fn booking_confirmed(&self, confirmation: &BookingConfirmation);
}

/// Writes the confirmation payload as a JSON log record
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ConfirmationSink for LogSink {
    fn booking_confirmed(&self, confirmation: &BookingConfirmation) {
        match serde_json::to_string(confirmation) {
            Ok(payload) => log::info!("📅 BOOKING: Booking details: {}", payload),
            Err(e) => log::error!("📅 BOOKING: Failed to serialize booking details: {}", e),
        }
    }
}

/// Keeps every confirmation in memory, in arrival order
#[derive(Debug, Default)]
pub struct RecordingSink {
    confirmations: RefCell<Vec<BookingConfirmation>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirmations(&self) -> Vec<BookingConfirmation> {
        self.confirmations.borrow().clone()
    }
}

impl ConfirmationSink for RecordingSink {
    fn booking_confirmed(&self, confirmation: &BookingConfirmation) {
        self.confirmations.borrow_mut().push(confirmation.clone());
    }
}

impl<T: ConfirmationSink + ?Sized> ConfirmationSink for &T {
    fn booking_confirmed(&self, confirmation: &BookingConfirmation) {
        (**self).booking_confirmed(confirmation)
    }
}
