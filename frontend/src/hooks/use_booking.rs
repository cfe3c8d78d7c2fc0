use std::rc::Rc;
use yew::prelude::*;
use shared::{BookingConfig, BookingConfirmation, BookingContext, BookingState, ContactField, SubmitOutcome};
use crate::services::date_utils::current_date;
use crate::services::logging::{BrowserSink, Logger};

pub struct UseBookingResult {
    pub state: BookingState,
    pub context: Rc<BookingContext>,
    /// Set after a successful submit until the modal is dismissed
    pub confirmation: Option<BookingConfirmation>,
    pub actions: UseBookingActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBookingActions {
    pub select_day: Callback<u32>,
    pub select_time: Callback<String>,
    pub update_field: Callback<(ContactField, String)>,
    pub submit: Callback<()>,
    pub dismiss_confirmation: Callback<()>,
}

#[hook]
pub fn use_booking(config: &BookingConfig) -> UseBookingResult {
    // The clock is read once per config, not on every render
    let context = use_memo(config.clone(), |config| BookingContext::from_config(config, current_date()));

    let state = {
        let context = context.clone();
        use_state(move || BookingState::initial(&context))
    };
    let confirmation = use_state(|| Option::<BookingConfirmation>::None);

    let select_day = {
        let state = state.clone();
        let context = context.clone();
        Callback::from(move |day: u32| {
            Logger::debug_with_component("booking", &format!("Day {} clicked", day));
            state.set(state.select_day(&context, day));
        })
    };

    let select_time = {
        let state = state.clone();
        let context = context.clone();
        Callback::from(move |label: String| {
            state.set(state.select_time(&context, &label));
        })
    };

    let update_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            state.set(state.update_field(field, value));
        })
    };

    let submit = {
        let state = state.clone();
        let context = context.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |_| {
            let (next, outcome) = state.submit(&context, &BrowserSink);
            state.set(next);
            if let SubmitOutcome::Confirmed(booking) = outcome {
                Logger::info_with_component("booking", "Booking confirmed!");
                confirmation.set(Some(booking));
            }
        })
    };

    let dismiss_confirmation = {
        let confirmation = confirmation.clone();
        Callback::from(move |_| confirmation.set(None))
    };

    UseBookingResult {
        state: (*state).clone(),
        context,
        confirmation: (*confirmation).clone(),
        actions: UseBookingActions {
            select_day,
            select_time,
            update_field,
            submit,
            dismiss_confirmation,
        },
    }
}
