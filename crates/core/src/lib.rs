//! Domain logic for the daily check-in service.
//!
//! Everything in this crate is pure: no database or HTTP access. The `db`
//! and `api` crates feed rows in and serialize the results out.

pub mod error;
pub mod field;
pub mod form_ref;
pub mod presentation;
pub mod results;
pub mod short_id;
pub mod submission;
pub mod types;
