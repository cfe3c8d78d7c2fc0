use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::BookingPage;
use services::config::load_config_or_default;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config_or_default());

    html! {
        <main class="app">
            <BookingPage config={(*config).clone()} />
        </main>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("📅 Booking widget starting...");

    yew::Renderer::<App>::new().render();
}
