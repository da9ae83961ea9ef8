//! Form references as they appear in URLs and submission payloads.
//!
//! A reference is either the form's UUID or its short alias. Only the
//! canonical hyphenated UUID shape counts as an id; anything else is looked
//! up as an alias.

use crate::types::DbId;

/// A parsed form reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRef {
    Id(DbId),
    Alias(String),
}

impl FormRef {
    pub fn parse(raw: &str) -> Self {
        if has_uuid_shape(raw) {
            if let Ok(id) = uuid::Uuid::parse_str(raw) {
                return Self::Id(id);
            }
        }
        Self::Alias(raw.to_string())
    }
}

impl std::fmt::Display for FormRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Alias(alias) => f.write_str(alias),
        }
    }
}

/// `8-4-4-4-12` hex digits, case-insensitive.
fn has_uuid_shape(s: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let mut parts = s.split('-');
    for len in GROUPS {
        match parts.next() {
            Some(p) if p.len() == len && p.bytes().all(|b| b.is_ascii_hexdigit()) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}
