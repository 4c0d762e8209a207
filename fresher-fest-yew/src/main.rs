use fresher_fest_yew::{App, GenAiProvider};
use yew::prelude::*;

/// API key baked in at build time (`GEMINI_API_KEY` in the trunk build env).
/// An empty key still renders the app; every generation then surfaces an
/// error notice instead of content.
const API_KEY: &str = match option_env!("GEMINI_API_KEY") {
    Some(key) => key,
    None => "",
};

#[function_component(Root)]
fn root() -> Html {
    html! {
        <GenAiProvider api_key={API_KEY}>
            <App />
        </GenAiProvider>
    }
}

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Fresher Fest");

    yew::Renderer::<Root>::new().render();
}
