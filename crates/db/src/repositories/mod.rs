//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Steps that must share a
//! transaction take `&mut Transaction` instead.

pub mod field_repo;
pub mod form_repo;
pub mod member_repo;
pub mod response_repo;
pub mod submission_repo;

pub use field_repo::FieldRepo;
pub use form_repo::FormRepo;
pub use member_repo::MemberRepo;
pub use response_repo::ResponseRepo;
pub use submission_repo::SubmissionRepo;
