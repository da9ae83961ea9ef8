//! Route definitions for forms, mounted at `/forms`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{forms, results};
use crate::state::AppState;

/// Form routes.
///
/// `{id}` on GET routes accepts either the form UUID or its short alias.
///
/// ```text
/// GET    /                      -> list_forms
/// POST   /                      -> create_form
/// GET    /{id}                  -> get_form
/// PUT    /{id}                  -> update_form
/// DELETE /{id}                  -> delete_form
/// GET    /{id}/entry            -> get_entry
/// GET    /{id}/responses        -> get_results
/// GET    /{id}/results/table    -> get_results_table
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list_forms).post(forms::create_form))
        .route(
            "/{id}",
            get(forms::get_form)
                .put(forms::update_form)
                .delete(forms::delete_form),
        )
        .route("/{id}/entry", get(forms::get_entry))
        .route("/{id}/responses", get(results::get_results))
        .route("/{id}/results/table", get(results::get_results_table))
}
