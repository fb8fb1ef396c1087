use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Entity;
use crate::dates::lenient_date;

/// A community member (non-staff, non-student).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub id_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    pub home_phone_number: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub address: Option<String>,
    pub title: Option<String>,
    pub line_id: Option<String>,
    pub comment: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub joined_at: Option<NaiveDate>,
}

/// Create/update payload for a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberUpsertReq {
    pub name: String,
    pub id_number: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    pub home_phone_number: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub address: Option<String>,
    pub title: Option<String>,
    pub line_id: Option<String>,
    pub comment: Option<String>,
    #[serde(default, with = "lenient_date")]
    pub joined_at: Option<NaiveDate>,
}

impl Entity for Member {
    fn id(&self) -> &str {
        &self.id
    }
}
