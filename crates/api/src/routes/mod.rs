pub mod cron;
pub mod forms;
pub mod health;
pub mod responses;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forms                                   list, create
/// /forms/{id}                              get (id or alias), update, delete
/// /forms/{id}/entry                        entry form with initial values
/// /forms/{id}/responses                    grouped results (?date=)
/// /forms/{id}/results/table                formatted result table (?date=)
///
/// /responses                               submit today's response (POST)
///
/// /cron/keep-alive                         database keep-alive (cron secret)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/forms", forms::router())
        .nest("/responses", responses::router())
        .nest("/cron", cron::router())
}
