use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Entity;
use crate::dates::lenient_date;

/// A student enrolled in the after-school program.
///
/// `gender` and `home_ownership` are enum-coded integers; their labels live
/// in the student screen's column descriptors, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub gender: Option<f64>,
    pub id_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub school_name: Option<String>,
    pub is_pg: Option<bool>,
    pub description: Option<String>,
    pub family_type: Option<String>,
    pub family_members: Option<f64>,
    pub breadwinner: Option<String>,
    pub occupation: Option<String>,
    pub subsidy: Option<String>,
    pub address: Option<String>,
    pub home_ownership: Option<f64>,
    pub home_phone_number: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub chinese_book: Option<String>,
    pub english_book: Option<String>,
    pub math_book: Option<String>,
    pub science_book: Option<String>,
    pub social_studies_book: Option<String>,
    pub line_id: Option<String>,
    pub comment: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub joined_at: Option<NaiveDate>,
}

/// Create/update payload for a student (everything but the id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentUpsertReq {
    pub name: String,
    pub gender: Option<f64>,
    pub id_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub school_name: Option<String>,
    pub is_pg: Option<bool>,
    pub description: Option<String>,
    pub family_type: Option<String>,
    pub family_members: Option<f64>,
    pub breadwinner: Option<String>,
    pub occupation: Option<String>,
    pub subsidy: Option<String>,
    pub address: Option<String>,
    pub home_ownership: Option<f64>,
    pub home_phone_number: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub chinese_book: Option<String>,
    pub english_book: Option<String>,
    pub math_book: Option<String>,
    pub science_book: Option<String>,
    pub social_studies_book: Option<String>,
    pub line_id: Option<String>,
    pub comment: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub joined_at: Option<NaiveDate>,
}

impl Entity for Student {
    fn id(&self) -> &str {
        &self.id
    }
}
