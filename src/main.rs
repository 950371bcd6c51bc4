#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialised: {}", err);
    }

    tracing::info!("Starting folio site");
    dioxus::launch(app::App);
}
