pub mod app;
pub mod components;
pub mod config;
pub mod navigation;
pub mod pages;
pub mod routes;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::navigation::Navigation;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    match Navigation::from_config() {
        Ok(navigation) => {
            leptos::mount::hydrate_body(move || view! { <App navigation /> });
        }
        Err(e) => leptos::logging::error!("Invalid navigation table: {}", e),
    }
}
