use yew::prelude::*;
use shared::{CalendarDay, CalendarDayType};
use crate::services::date_utils::WEEKDAY_HEADERS;

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub month_label: String,
    pub selected_date: Option<u32>,
    pub days: Vec<CalendarDay>,
    /// Empty cells before the 1st
    pub leading_blanks: u32,
    pub error: Option<String>,
    pub on_select: Callback<u32>,
}

#[function_component(BookingCalendar)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    let title = match props.selected_date {
        Some(day) => format!("{} {}", props.month_label, day),
        None => props.month_label.clone(),
    };

    html! {
        <section class="booking-calendar">
            <h2>{title}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}

            <div class="calendar-grid">
                {for WEEKDAY_HEADERS.iter().map(|name| html! {
                    <div class="calendar-weekday">{*name}</div>
                })}

                {for (0..props.leading_blanks).map(|_| html! {
                    <div class="calendar-day empty"></div>
                })}

                {for props.days.iter().map(|day| {
                    let type_class = match day.day_type() {
                        CalendarDayType::Selected => "selected",
                        CalendarDayType::Blocked => "blocked",
                        CalendarDayType::Weekend => "weekend",
                        CalendarDayType::Weekday => "weekday",
                    };
                    // The click is always forwarded; the booking state decides
                    // whether it changes anything
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let day_number = day.day;
                        Callback::from(move |_: MouseEvent| on_select.emit(day_number))
                    };
                    html! {
                        <div
                            key={day.day}
                            class={classes!(
                                "calendar-day",
                                type_class,
                                day.is_blocked.then(|| "preselected"),
                                day.is_past.then(|| "past"),
                                day.is_clickable().then(|| "clickable")
                            )}
                            title={if day.is_blocked { "Unavailable" } else { "" }}
                            {onclick}
                        >
                            {day.day}
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
