use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotPickerProps {
    pub slots: Vec<String>,
    pub selected: Option<String>,
    pub error: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(TimeSlotPicker)]
pub fn time_slot_picker(props: &TimeSlotPickerProps) -> Html {
    html! {
        <section class="time-slots">
            <h3>{"Select a Time"}</h3>

            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error}</p> }
            } else { html! {} }}

            <div class="time-slot-grid">
                {for props.slots.iter().map(|slot| {
                    let is_selected = props.selected.as_deref() == Some(slot.as_str());
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let slot = slot.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(slot.clone()))
                    };
                    html! {
                        <button
                            key={slot.clone()}
                            type="button"
                            class={classes!("time-slot", is_selected.then(|| "selected"))}
                            {onclick}
                        >
                            {slot}
                        </button>
                    }
                })}
            </div>
        </section>
    }
}
