use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod display;
pub mod error;
pub mod nutrition;
pub mod percentage;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Route panics to the browser console
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
