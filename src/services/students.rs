//! Students service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::student::{Student, StudentData},
    repository::StudentStore,
};

#[derive(Clone)]
pub struct StudentsService {
    store: Arc<dyn StudentStore>,
}

impl StudentsService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Create a student; the store assigns the ID
    pub async fn create(&self, data: &StudentData) -> AppResult<Student> {
        let student = self.store.save(None, data).await?;
        tracing::info!("Created student {}", student.id);
        Ok(student)
    }

    pub async fn get_all(&self) -> AppResult<Vec<Student>> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        self.store.find_by_id(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        self.store.find_by_email(email).await
    }

    pub async fn get_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>> {
        self.store.find_by_roll_number(roll_number).await
    }

    pub async fn get_by_course(&self, course: &str) -> AppResult<Vec<Student>> {
        self.store.find_by_course(course).await
    }

    pub async fn get_by_semester(&self, semester: i32) -> AppResult<Vec<Student>> {
        self.store.find_by_semester(semester).await
    }

    /// Case-insensitive substring search on first name
    pub async fn search_by_first_name(&self, fragment: &str) -> AppResult<Vec<Student>> {
        self.store.find_by_first_name_containing(fragment).await
    }

    /// Overwrite all mutable fields of an existing student.
    ///
    /// Returns `None` without writing anything when the student does not exist.
    pub async fn update(&self, id: i64, data: &StudentData) -> AppResult<Option<Student>> {
        let Some(mut student) = self.store.find_by_id(id).await? else {
            tracing::debug!("Update skipped, student {} not found", id);
            return Ok(None);
        };

        student.apply(data);
        let saved = self.store.save(Some(student.id), &student.data()).await?;
        tracing::info!("Updated student {}", saved.id);
        Ok(Some(saved))
    }

    /// Delete a student; deleting a missing student succeeds
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await?;
        tracing::info!("Deleted student {}", id);
        Ok(())
    }

    pub async fn is_ready(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
