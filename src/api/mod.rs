//! API handlers for the student records REST endpoints

pub mod health;
pub mod openapi;
pub mod students;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route("/students/email/:email", get(students::get_student_by_email))
        .route("/students/roll/:roll_number", get(students::get_student_by_roll_number))
        .route("/students/course/:course", get(students::list_students_by_course))
        .route("/students/semester/:semester", get(students::list_students_by_semester))
        .route("/students/search/:first_name", get(students::search_students));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
