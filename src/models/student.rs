//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Store-assigned identifier, never changed after creation
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Unique across all students
    pub email: Option<String>,
    /// Unique across all students
    pub roll_number: Option<String>,
    pub course: Option<String>,
    pub semester: Option<i32>,
    pub phone_number: Option<String>,
}

/// Create or update student request
///
/// Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub roll_number: Option<String>,
    pub course: Option<String>,
    pub semester: Option<i32>,
    pub phone_number: Option<String>,
}

impl Student {
    /// Overwrite every mutable field with the values from `data`, nulls included
    pub fn apply(&mut self, data: &StudentData) {
        self.first_name = data.first_name.clone();
        self.last_name = data.last_name.clone();
        self.email = data.email.clone();
        self.roll_number = data.roll_number.clone();
        self.course = data.course.clone();
        self.semester = data.semester;
        self.phone_number = data.phone_number.clone();
    }

    /// Mutable fields of this record
    pub fn data(&self) -> StudentData {
        StudentData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            roll_number: self.roll_number.clone(),
            course: self.course.clone(),
            semester: self.semester,
            phone_number: self.phone_number.clone(),
        }
    }

    pub fn from_data(id: i64, data: StudentData) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            roll_number: data.roll_number,
            course: data.course,
            semester: data.semester,
            phone_number: data.phone_number,
        }
    }
}
