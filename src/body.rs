//! Helpers for the loosely-typed JSON bodies the dashboard posts.

/// Trimmed value, or `None` when missing or blank.
pub fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// `user_id` wins over `userId`; blank values count as missing.
pub fn body_user_id(user_id: Option<String>, user_id_alt: Option<String>) -> Option<String> {
    non_blank(user_id).or_else(|| non_blank(user_id_alt))
}
