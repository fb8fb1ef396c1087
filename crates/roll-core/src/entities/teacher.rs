use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Entity;
use crate::dates::lenient_date;

/// A staff account. `password` is write-only: the backend never returns it,
/// and an empty value on update means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Enum-coded: 0 full-time, 1 part-time, 2 volunteer.
    pub employment_type: f64,
    pub name: String,
    pub phone: Option<String>,
    pub responsibility: Option<String>,
    pub background: Option<String>,
    pub id_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Create/update payload for a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherUpsertReq {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub employment_type: f64,
    pub name: String,
    pub phone: Option<String>,
    pub responsibility: Option<String>,
    pub background: Option<String>,
    pub id_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
}

impl Entity for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}
