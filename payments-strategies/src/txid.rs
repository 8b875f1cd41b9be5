//! Transaction identifier generators.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// `prefix` followed by `len` lowercase hex characters (at most 32).
pub fn random_hex(prefix: &str, len: usize) -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(len);
    format!("{prefix}{hex}")
}

/// `prefix` followed by the UTC timestamp as `yyyyMMddHHmmss`.
pub fn timestamped(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{prefix}{}", at.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
pub(crate) fn has_hex_suffix(id: &str, prefix: &str, len: usize) -> bool {
    id.strip_prefix(prefix).is_some_and(|rest| {
        rest.len() == len
            && rest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    })
}
