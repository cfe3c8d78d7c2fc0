use yew::prelude::*;
use shared::{BookingConfig, BookingField, ContactField};
use super::booking_calendar::BookingCalendar;
use super::confirmation_modal::ConfirmationModal;
use super::contact_form::ContactDetailsForm;
use super::time_slot_picker::TimeSlotPicker;
use crate::hooks::use_booking::use_booking;
use crate::services::date_utils::leading_blank_cells;

#[derive(Properties, PartialEq)]
pub struct BookingPageProps {
    pub config: BookingConfig,
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let booking = use_booking(&props.config);
    let state = &booking.state;
    let calendar = &booking.context.calendar;

    let error_for = |field: BookingField| state.errors.get(field).map(str::to_string);

    html! {
        <div class="booking-page">
            <div class="booking-columns">
                <div class="booking-column">
                    <BookingCalendar
                        month_label={calendar.month_name().to_string()}
                        selected_date={state.selected_date}
                        days={calendar.days(state.selected_date)}
                        leading_blanks={leading_blank_cells(calendar.first_weekday())}
                        error={error_for(BookingField::Date)}
                        on_select={booking.actions.select_day.clone()}
                    />
                    <TimeSlotPicker
                        slots={booking.context.slots.labels().to_vec()}
                        selected={state.selected_time.clone()}
                        error={error_for(BookingField::Time)}
                        on_select={booking.actions.select_time.clone()}
                    />
                </div>

                <div class="booking-column">
                    <ContactDetailsForm
                        form={state.form.clone()}
                        name_error={error_for(ContactField::Name.into())}
                        on_change={booking.actions.update_field.clone()}
                        on_submit={booking.actions.submit.clone()}
                    />
                </div>
            </div>

            {if let Some(confirmation) = booking.confirmation.as_ref() {
                html! {
                    <ConfirmationModal
                        confirmation={confirmation.clone()}
                        on_close={booking.actions.dismiss_confirmation.clone()}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
