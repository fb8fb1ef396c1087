use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

/// One exam's grades for one student.
///
/// `student_id` is a foreign key picked through a hidden enum column whose
/// options are built from the student list; `name` is the server-joined
/// student name and is view-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGrade {
    pub id: String,
    pub name: Option<String>,
    pub student_id: String,
    pub academic_year: f64,
    /// Enum-coded: 0 first semester, 1 second semester.
    pub semester: f64,
    /// Enum-coded: 0 midterm, 1 final.
    pub exam_type: f64,
    pub chinese_book: Option<String>,
    pub english_book: Option<String>,
    pub math_book: Option<String>,
    pub science_book: Option<String>,
    pub social_studies_book: Option<String>,
    pub chinese_score: Option<f64>,
    pub english_score: Option<f64>,
    pub math_score: Option<f64>,
    pub science_score: Option<f64>,
    pub social_studies_score: Option<f64>,
    pub comment: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update payload for a grade record (server-maintained fields
/// excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGradeUpsertReq {
    pub student_id: String,
    pub academic_year: f64,
    pub semester: f64,
    pub exam_type: f64,
    pub chinese_book: Option<String>,
    pub english_book: Option<String>,
    pub math_book: Option<String>,
    pub science_book: Option<String>,
    pub social_studies_book: Option<String>,
    pub chinese_score: Option<f64>,
    pub english_score: Option<f64>,
    pub math_score: Option<f64>,
    pub science_score: Option<f64>,
    pub social_studies_score: Option<f64>,
    pub comment: Option<String>,
}

impl Entity for StudentGrade {
    fn id(&self) -> &str {
        &self.id
    }
}
