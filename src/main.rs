//! Casino Admin Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod context;
mod pages;
mod store;

use app::App;
use console_logger::LevelFilter;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(LevelFilter::DEBUG);
    mount_to_body(App);
}
