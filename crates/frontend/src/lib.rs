//! Company Announcements - Yew WASM Frontend
//!
//! This crate provides the web UI that renders a company's announcements
//! as cards, newest first.

mod api;
mod app;
mod components;
mod pages;

pub use api::{FetchError, fetch_announcements, fetch_companies};
pub use app::{App, Route};
pub use components::{
    AnnouncementCard, AnnouncementCardProps, AnnouncementList, AnnouncementListProps,
};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
