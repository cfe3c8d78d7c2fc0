use yew::prelude::*;
use shared::BookingConfirmation;
use shared::calendar::month_name;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub confirmation: BookingConfirmation,
    pub on_close: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let booking = &props.confirmation;
    let optional_rows = [
        ("Email", &booking.contact.email),
        ("Address", &booking.contact.address),
        ("Phone", &booking.contact.phone),
        ("Notes", &booking.contact.notes),
    ];

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal confirmation-modal" onclick={on_modal_click}>
                <h3>{"Booking confirmed!"}</h3>
                <dl class="booking-summary">
                    <dt>{"When"}</dt>
                    <dd>{format!("{} {}, {} at {}", month_name(booking.month), booking.date, booking.year, booking.time)}</dd>
                    <dt>{"Name"}</dt>
                    <dd>{&booking.contact.name}</dd>
                    {for optional_rows.iter().filter(|(_, value)| !value.trim().is_empty()).map(|(label, value)| html! {
                        <>
                            <dt>{*label}</dt>
                            <dd>{value.as_str()}</dd>
                        </>
                    })}
                </dl>
                <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
