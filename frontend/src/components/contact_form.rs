use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::{ContactField, ContactForm};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub form: ContactForm,
    pub name_error: Option<String>,
    pub on_change: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

/// Resolve an input event to the field named by the element's `name`
/// attribute and its current value.
fn field_change(e: &InputEvent) -> Option<(ContactField, String)> {
    let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else {
        return None;
    };
    ContactField::from_name(&name).map(|field| (field, value))
}

#[function_component(ContactDetailsForm)]
pub fn contact_details_form(props: &ContactFormProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(change) = field_change(&e) {
                on_change.emit(change);
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="contact-details">
            <h2>{"Add your details"}</h2>
            <form class="contact-form" {onsubmit}>
                <div class="form-group">
                    <input
                        type="text"
                        name={ContactField::Name.as_str()}
                        placeholder="First and last name *"
                        value={props.form.name.clone()}
                        oninput={oninput.clone()}
                    />
                    {if let Some(error) = props.name_error.as_ref() {
                        html! { <p class="field-error small">{error}</p> }
                    } else { html! {} }}
                </div>

                <input
                    type="email"
                    name={ContactField::Email.as_str()}
                    placeholder="Email (optional)"
                    value={props.form.email.clone()}
                    oninput={oninput.clone()}
                />
                <input
                    type="text"
                    name={ContactField::Address.as_str()}
                    placeholder="Address (optional)"
                    value={props.form.address.clone()}
                    oninput={oninput.clone()}
                />
                <input
                    type="tel"
                    name={ContactField::Phone.as_str()}
                    placeholder="Phone number (optional)"
                    value={props.form.phone.clone()}
                    oninput={oninput.clone()}
                />
                <textarea
                    name={ContactField::Notes.as_str()}
                    placeholder="Notes (optional)"
                    value={props.form.notes.clone()}
                    {oninput}
                />

                <button type="submit" class="btn btn-primary book-btn">
                    {"Book Appointment"}
                </button>
            </form>
        </section>
    }
}
