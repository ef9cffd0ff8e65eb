//! Announcement card component: fetches a company's announcements once
//! per mount and renders them newest first.

use std::cell::Cell;
use std::rc::Rc;

use core_types::{Announcement, CardView, build_cards};
use yew::prelude::*;

use crate::api::{self, DEFAULT_API_BASE, fetch_announcements};
use crate::components::AnnouncementList;

/// Properties for AnnouncementCard component.
#[derive(Properties, PartialEq)]
pub struct AnnouncementCardProps {
    /// Resolves the handle of the company whose announcements are shown
    pub handle_user: Callback<(), String>,
    /// Base URL of the announcements API
    #[prop_or(AttrValue::Static(DEFAULT_API_BASE))]
    pub api_base: AttrValue,
}

/// Fetch state of the announcement collection.
#[derive(Debug, PartialEq)]
enum Feed {
    Pending,
    Loaded(Vec<Announcement>),
    /// Reason the fetch failed, for logging
    Failed(String),
}

/// Decide the next feed state once the fetch completes.
///
/// Returns `None` when the view was unmounted while the request was in
/// flight, so a late result never touches state.
fn settle(mounted: &Cell<bool>, result: api::Result<Vec<Announcement>>) -> Option<Feed> {
    if !mounted.get() {
        return None;
    }

    Some(match result {
        Ok(data) => Feed::Loaded(data),
        Err(e) => Feed::Failed(e.to_string()),
    })
}

/// Cards to render for a feed state. Only a loaded feed yields cards.
fn cards_for(feed: &Feed) -> Vec<CardView> {
    match feed {
        Feed::Loaded(announcements) => build_cards(announcements),
        Feed::Pending | Feed::Failed(_) => Vec::new(),
    }
}

/// Announcement card component.
///
/// Renders an empty container until the collection arrives. A failed
/// fetch is logged and leaves the container empty.
#[function_component(AnnouncementCard)]
pub fn announcement_card(props: &AnnouncementCardProps) -> Html {
    let feed = use_state(|| Feed::Pending);

    // Fetch once per mount
    {
        let feed = feed.clone();
        let handle_user = props.handle_user.clone();
        let api_base = props.api_base.clone();

        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            let handle = handle_user.emit(());

            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_announcements(&api_base, &handle).await;

                    if let Some(next) = settle(&mounted, result) {
                        if let Feed::Failed(reason) = &next {
                            web_sys::console::error_1(
                                &format!("Failed to fetch announcements for {}: {}", handle, reason)
                                    .into(),
                            );
                        }
                        feed.set(next);
                    }
                });
            }

            move || mounted.set(false)
        });
    }

    let cards = cards_for(&feed);

    html! { <AnnouncementList {cards} /> }
}
