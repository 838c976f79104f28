//! Data models for student records

pub mod student;

// Re-export commonly used types
pub use student::{Student, StudentData};
