//! Home page component.

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, DEFAULT_API_BASE, fetch_companies};
use crate::app::Route;

/// Handles to store once the fetch completes. `None` when the page was
/// unmounted while the request was in flight, or the fetch failed.
fn settle(mounted: &Cell<bool>, result: api::Result<Vec<String>>) -> Option<Vec<String>> {
    if !mounted.get() {
        return None;
    }
    result.ok()
}

/// Home page component listing known companies.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let companies = use_state(Vec::<String>::new);

    {
        let companies = companies.clone();

        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));

            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_companies(DEFAULT_API_BASE).await;

                    if let Err(e) = &result {
                        web_sys::console::error_1(
                            &format!("Failed to fetch companies: {}", e).into(),
                        );
                    }

                    if let Some(data) = settle(&mounted, result) {
                        companies.set(data);
                    }
                });
            }

            move || mounted.set(false)
        });
    }

    html! {
        <div>
            <h1>{"Companies"}</h1>
            <ul class="nav-links">
                { for companies.iter().map(|handle| html! {
                    <li key={handle.clone()}>
                        <Link<Route> to={Route::Company { handle: handle.clone() }}>
                            { handle }
                        </Link<Route>>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;

    fn unavailable() -> FetchError {
        FetchError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
    }

    #[test]
    fn test_settle_stores_handles_while_mounted() {
        let mounted = Cell::new(true);

        let handles = settle(&mounted, Ok(vec!["1".to_string(), "2".to_string()]));

        assert_eq!(handles, Some(vec!["1".to_string(), "2".to_string()]));
    }

    #[test]
    fn test_settle_ignores_failure() {
        let mounted = Cell::new(true);

        assert_eq!(settle(&mounted, Err(unavailable())), None);
    }

    #[test]
    fn test_settle_after_unmount_is_dropped() {
        let mounted = Cell::new(false);

        assert_eq!(settle(&mounted, Ok(vec!["1".to_string()])), None);
    }
}
