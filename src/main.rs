//! Hogwarts Compendium Entry Point

mod analytics;
mod api;
mod app;
mod assets;
mod components;
mod context;
mod favorites;
mod models;
mod platform;
mod reconcile;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
