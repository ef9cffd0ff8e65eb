//! Company API routes.

use axum::{Json, extract::State};

use crate::state::AppState;

/// GET /api/companies - List known company handles.
pub async fn list_companies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.handles())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_list_companies_sorted() {
        let mut companies = BTreeMap::new();
        companies.insert("globex".to_string(), vec![]);
        companies.insert("acme".to_string(), vec![]);

        let state = AppState::new(companies).unwrap();
        let Json(handles) = list_companies(State(state)).await;

        assert_eq!(handles, vec!["acme".to_string(), "globex".to_string()]);
    }
}
