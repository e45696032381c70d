#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod cards;
pub mod catalog;
pub mod contact;
pub mod motion;
pub mod nav;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio site hydrating");
    leptos::mount::hydrate_body(App);
}
