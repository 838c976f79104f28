//! Students repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::student::{Student, StudentData},
};

/// Storage operations on the `students` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a new row (`id` is `None`) or insert-or-update the row with `id`
    async fn save(&self, id: Option<i64>, data: &StudentData) -> AppResult<Student>;

    async fn find_all(&self) -> AppResult<Vec<Student>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;

    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>>;

    async fn find_by_course(&self, course: &str) -> AppResult<Vec<Student>>;

    async fn find_by_semester(&self, semester: i32) -> AppResult<Vec<Student>>;

    /// Case-insensitive substring match on first name
    async fn find_by_first_name_containing(&self, fragment: &str) -> AppResult<Vec<Student>>;

    /// Delete by ID; deleting a missing row is not an error
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Check the store answers queries
    async fn ping(&self) -> AppResult<()>;
}

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so the fragment matches literally
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl StudentStore for StudentsRepository {
    async fn save(&self, id: Option<i64>, data: &StudentData) -> AppResult<Student> {
        let row = match id {
            None => {
                sqlx::query_as::<_, Student>(
                    r#"
                    INSERT INTO students
                        (first_name, last_name, email, roll_number, course, semester, phone_number)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING *
                    "#,
                )
                .bind(&data.first_name)
                .bind(&data.last_name)
                .bind(&data.email)
                .bind(&data.roll_number)
                .bind(&data.course)
                .bind(data.semester)
                .bind(&data.phone_number)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Student>(
                    r#"
                    INSERT INTO students
                        (id, first_name, last_name, email, roll_number, course, semester, phone_number)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    ON CONFLICT (id) DO UPDATE SET
                        first_name = EXCLUDED.first_name,
                        last_name = EXCLUDED.last_name,
                        email = EXCLUDED.email,
                        roll_number = EXCLUDED.roll_number,
                        course = EXCLUDED.course,
                        semester = EXCLUDED.semester,
                        phone_number = EXCLUDED.phone_number
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&data.first_name)
                .bind(&data.last_name)
                .bind(&data.email)
                .bind(&data.roll_number)
                .bind(&data.course)
                .bind(data.semester)
                .bind(&data.phone_number)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Student>> {
        let row = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let row = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>> {
        let row = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE roll_number = $1")
            .bind(roll_number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_course(&self, course: &str) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE course = $1 ORDER BY id",
        )
        .bind(course)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_semester(&self, semester: i32) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE semester = $1 ORDER BY id",
        )
        .bind(semester)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_first_name_containing(&self, fragment: &str) -> AppResult<Vec<Student>> {
        let pattern = format!("%{}%", escape_like(fragment));
        let rows = sqlx::query_as::<_, Student>(
            r#"SELECT * FROM students WHERE first_name ILIKE $1 ESCAPE '\' ORDER BY id"#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Delete of student {} matched no rows", id);
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
