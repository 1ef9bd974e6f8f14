use yew::prelude::*;
use log::info;

mod background;
mod config;
mod dom;
mod error;
mod pages {
    pub mod landing;
}
mod widgets {
    pub mod clock;
    pub mod nav;
    pub mod reveal;
    pub mod toast;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
