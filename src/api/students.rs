//! Student management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    error::AppResult,
    models::student::{Student, StudentData},
    AppState,
};

/// Single-record lookup result: the record as JSON, or an empty 404
#[derive(Debug)]
pub struct Found<T>(pub Option<T>);

impl<T: Serialize> IntoResponse for Found<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Some(value) => Json(value).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Create a student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = StudentData,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 500, description = "Constraint violation or store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(data): Json<StudentData>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = state.services.students.create(&data).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses(
        (status = 200, description = "All students", body = Vec<Student>)
    )
)]
pub async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.get_all().await?;
    Ok(Json(students))
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Found<Student>> {
    Ok(Found(state.services.students.get_by_id(id).await?))
}

/// Get student by email
#[utoipa::path(
    get,
    path = "/api/students/email/{email}",
    tag = "students",
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Found<Student>> {
    Ok(Found(state.services.students.get_by_email(&email).await?))
}

/// Get student by roll number
#[utoipa::path(
    get,
    path = "/api/students/roll/{roll_number}",
    tag = "students",
    params(("roll_number" = String, Path, description = "Exact roll number")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student_by_roll_number(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> AppResult<Found<Student>> {
    Ok(Found(
        state.services.students.get_by_roll_number(&roll_number).await?,
    ))
}

/// List students in a course
#[utoipa::path(
    get,
    path = "/api/students/course/{course}",
    tag = "students",
    params(("course" = String, Path, description = "Exact course label")),
    responses(
        (status = 200, description = "Students in the course", body = Vec<Student>)
    )
)]
pub async fn list_students_by_course(
    State(state): State<AppState>,
    Path(course): Path<String>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.get_by_course(&course).await?;
    Ok(Json(students))
}

/// List students in a semester
#[utoipa::path(
    get,
    path = "/api/students/semester/{semester}",
    tag = "students",
    params(("semester" = i32, Path, description = "Semester number")),
    responses(
        (status = 200, description = "Students in the semester", body = Vec<Student>)
    )
)]
pub async fn list_students_by_semester(
    State(state): State<AppState>,
    Path(semester): Path<i32>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.get_by_semester(semester).await?;
    Ok(Json(students))
}

/// Search students by first name (case-insensitive substring)
#[utoipa::path(
    get,
    path = "/api/students/search/{first_name}",
    tag = "students",
    params(("first_name" = String, Path, description = "Fragment of the first name")),
    responses(
        (status = 200, description = "Matching students", body = Vec<Student>)
    )
)]
pub async fn search_students(
    State(state): State<AppState>,
    Path(first_name): Path<String>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state
        .services
        .students
        .search_by_first_name(&first_name)
        .await?;
    Ok(Json(students))
}

/// Update a student, overwriting every field
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = StudentData,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<StudentData>,
) -> AppResult<Found<Student>> {
    Ok(Found(state.services.students.update(id, &data).await?))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted, or did not exist")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.students.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
