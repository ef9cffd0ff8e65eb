//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{CompanyPage, HomePage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/company/:handle")]
    Company { handle: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Company { handle } => html! { <CompanyPage {handle} /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <main class="main-content">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}
