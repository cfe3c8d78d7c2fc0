use shared::{BookingConfirmation, ConfirmationSink, LogSink};

/// Component-tagged logging on top of the `log` facade
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(log::Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(log::Level::Info, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(log::Level::Error, message, component);
    }

    fn log(level: log::Level, message: &str, component: &str) {
        log::log!(target: component, level, "{}", message);
    }
}

/// Confirmation sink used by the booking page: the JSON payload goes to the
/// log and a one-line summary to the browser console.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSink;

impl ConfirmationSink for BrowserSink {
    fn booking_confirmed(&self, confirmation: &BookingConfirmation) {
        LogSink.booking_confirmed(confirmation);
        gloo::console::log!(&format!(
            "Booking confirmed: {} {} at {} for {}",
            shared::calendar::month_name(confirmation.month),
            confirmation.date,
            confirmation.time,
            confirmation.contact.name.trim()
        ));
    }
}
