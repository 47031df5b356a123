//! Opaque identifier generation.
//!
//! Module, topic, exercise, and question ids are short random hex tokens.
//! They are practically collision-free within a single process; no
//! uniqueness is guaranteed across process restarts.

use uuid::Uuid;

/// Length of generated id tokens.
const ID_LEN: usize = 8;

/// Generate a fresh 8-character lowercase hex token.
pub fn short_id() -> String {
    let mut buf = Uuid::encode_buffer();
    let hex = Uuid::new_v4().simple().encode_lower(&mut buf);
    hex[..ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn short_id_is_eight_lowercase_hex_chars() {
        let id = short_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn short_id_does_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| short_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
