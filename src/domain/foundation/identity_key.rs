//! Case-insensitive identity keys.
//!
//! Flight ids and seat numbers identify their entities regardless of
//! letter case, so "f001" and "F001" name the same flight.

use std::hash::Hasher;

/// Returns true if both keys name the same entity.
pub fn keys_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Canonical form of a key, suitable for map lookups.
pub fn normalized_key(key: &str) -> String {
    key.to_lowercase()
}

/// Feeds the canonical form of `key` into `state`, consistent with [`keys_match`].
pub fn hash_key<H: Hasher>(key: &str, state: &mut H) {
    for c in key.chars().flat_map(char::to_lowercase) {
        state.write_u32(c as u32);
    }
    state.write_u8(0xff);
}
