//! Business logic services

pub mod students;

use std::sync::Arc;

use crate::repository::{Repository, StudentStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub students: students::StudentsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self::with_store(Arc::new(repository.students))
    }

    /// Create all services on top of an arbitrary student store
    pub fn with_store(store: Arc<dyn StudentStore>) -> Self {
        Self {
            students: students::StudentsService::new(store),
        }
    }
}
