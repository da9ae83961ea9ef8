//! Short form aliases used in shareable links.
//!
//! Aliases are 6 characters drawn from lowercase ASCII letters and digits.
//! Uniqueness is enforced by the store; generation only has to be random.

use rand::Rng;

/// Length of a generated alias.
pub const SHORT_ID_LENGTH: usize = 6;

/// Characters an alias is drawn from.
pub const SHORT_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default number of aliases tried before form creation gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Generate a random alias from the thread-local RNG.
pub fn generate_short_id() -> String {
    generate_short_id_with(&mut rand::rng())
}

/// Generate a random alias from the given RNG.
pub fn generate_short_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_ID_LENGTH)
        .map(|_| char::from(SHORT_ID_ALPHABET[rng.random_range(0..SHORT_ID_ALPHABET.len())]))
        .collect()
}

/// Whether `s` has the shape of a generated alias.
pub fn is_valid_short_id(s: &str) -> bool {
    s.len() == SHORT_ID_LENGTH && s.bytes().all(|b| SHORT_ID_ALPHABET.contains(&b))
}
