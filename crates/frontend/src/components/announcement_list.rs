//! Announcement card list component.

use core_types::CardView;
use yew::prelude::*;

/// Properties for AnnouncementList component.
#[derive(Properties, PartialEq)]
pub struct AnnouncementListProps {
    /// Cards in display order
    pub cards: Vec<CardView>,
}

/// Renders announcement cards inside the card container.
///
/// Each card is keyed by its announcement id so element identity survives
/// re-renders.
#[function_component(AnnouncementList)]
pub fn announcement_list(props: &AnnouncementListProps) -> Html {
    html! {
        <div class="ann-card-container">
            { for props.cards.iter().map(|card| html! {
                <div key={card.key.clone()} class="ann-card-wrapper">
                    <div class="ann-card-header">
                        <h3>{ &card.author_name }</h3>
                        <h3>{ &card.date_label }</h3>
                    </div>
                    <h3>{ &card.title }</h3>
                    <div class="ann-card-content">
                        <p>{ &card.message }</p>
                    </div>
                </div>
            })}
        </div>
    }
}
