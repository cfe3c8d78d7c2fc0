pub mod booking_calendar;
pub mod booking_page;
pub mod confirmation_modal;
pub mod contact_form;
pub mod time_slot_picker;

pub use booking_page::BookingPage;
