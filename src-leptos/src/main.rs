//! NoorVerse - Leptos Frontend
//!
//! Client-side rendered single page. Everything interactive on the site is
//! wired up from here; static content ships in the same bundle.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use chrono as _;
use gloo_timers as _;
use js_sys as _;
use noorverse_types as _;
use serde as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use leptos::prelude::*;
use noorverse_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("NoorVerse (Leptos) starting...");

    // Mount the app
    mount_to_body(App);
}
