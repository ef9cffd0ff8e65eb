//! Company announcements page.

use yew::prelude::*;

use crate::components::AnnouncementCard;

/// Properties for CompanyPage.
#[derive(Properties, PartialEq)]
pub struct CompanyPageProps {
    pub handle: String,
}

/// Company announcements page component.
#[function_component(CompanyPage)]
pub fn company_page(props: &CompanyPageProps) -> Html {
    let handle_user = {
        let handle = props.handle.clone();
        Callback::from(move |_: ()| handle.clone())
    };

    // Keyed by handle so switching company remounts the card and refetches
    html! {
        <div>
            <h1>{ format!("Announcements: {}", props.handle) }</h1>
            <AnnouncementCard key={props.handle.clone()} {handle_user} />
        </div>
    }
}
