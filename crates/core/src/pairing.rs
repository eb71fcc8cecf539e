//! Canonical ordering for unordered user pairs.
//!
//! A conversation belongs to an *unordered* pair of users, but the database
//! stores it under an ordered `(user_low_id, user_high_id)` key so a single
//! uniqueness constraint can guarantee exactly one row per pair. Every
//! conversation lookup and creation must go through [`canonical_pair`] so
//! both directions of a like map to the same storage key.

use crate::types::DbId;

/// Order two user ids into the canonical `(low, high)` form.
///
/// Callers are expected to have rejected self-pairs already (the schema's
/// `CHECK (user_low_id < user_high_id)` backstops the degenerate case).
pub fn canonical_pair(a: DbId, b: DbId) -> (DbId, DbId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_ascending() {
        assert_eq!(canonical_pair(7, 3), (3, 7));
        assert_eq!(canonical_pair(3, 7), (3, 7));
    }

    #[test]
    fn both_directions_map_to_same_key() {
        assert_eq!(canonical_pair(101, 42), canonical_pair(42, 101));
    }
}
