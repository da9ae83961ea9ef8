//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the API.
//! Handlers delegate to the repositories in `dailycheck_db`, run the pure
//! logic from `dailycheck_core`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod cron;
pub mod forms;
pub mod responses;
pub mod results;

use dailycheck_core::error::CoreError;
use dailycheck_core::form_ref::FormRef;
use dailycheck_db::models::form::FormWithFields;
use dailycheck_db::repositories::FormRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve a form reference from a path or payload, or fail with 404.
pub(crate) async fn load_form(state: &AppState, raw_ref: &str) -> AppResult<FormWithFields> {
    let form_ref = FormRef::parse(raw_ref);
    FormRepo::resolve_with_fields(&state.pool, &form_ref)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Form",
                key: form_ref.to_string(),
            })
        })
}
