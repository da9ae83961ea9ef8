//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request payloads that write it

pub mod field;
pub mod form;
pub mod member;
pub mod response;
