use uuid::Uuid;

pub type Id = String;

pub fn generate_id() -> Id {
    Uuid::new_v4().to_string()
}

/// Case-insensitive equality used for genre matching
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring check used for title matching
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
