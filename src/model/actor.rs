use crate::model::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: Id,
    pub name: String,
    pub birth_year: i32,
}

impl Actor {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_year,
        }
    }
}
