//! Request extractors guarding non-public routes.
//!
//! - [`cron::CronAuth`] -- Requires the shared cron secret in production.

pub mod cron;
