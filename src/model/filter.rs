use serde::{Deserialize, Serialize};

/// Predicates for searching movies. Absent fields do not constrain; present
/// ones must all hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilter {
    /// Case-insensitive substring of the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Case-insensitive exact genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year_from: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year_to: Option<i32>,
}

impl MovieFilter {
    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
