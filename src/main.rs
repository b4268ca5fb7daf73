use log::{info, Level};
use yew::prelude::*;

mod components;
mod config;
mod content;
mod effects;
mod hooks;
mod labels;
mod pages;
mod sections;
mod specs;
mod state;
mod styles;

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{ styles::BASE_CSS }</style>
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
