//! Repository layer for database operations

pub mod students;

use sqlx::{Pool, Postgres};

pub use students::{StudentStore, StudentsRepository};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub students: StudentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            students: StudentsRepository::new(pool.clone()),
            pool,
        }
    }
}
