//! Platform-independent core of the appointment booking widget.
//!
//! The frontend renders what these types compute; all selection and
//! validation rules live here so they can be tested without a browser.

pub mod booking;
pub mod calendar;
pub mod config;
pub mod form;
pub mod sink;
pub mod slots;

pub use booking::{BookingContext, BookingPhase, BookingState, SubmitOutcome};
pub use calendar::{CalendarDay, CalendarDayType, CalendarMonthView};
pub use config::{BookingConfig, ConfigError, InitialSelection};
pub use form::{BookingField, ContactField, ContactForm, ValidationErrors};
pub use sink::{BookingConfirmation, ConfirmationSink, LogSink, RecordingSink};
pub use slots::TimeSlots;
