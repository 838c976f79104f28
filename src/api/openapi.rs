//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Records API",
        version = "1.0.0",
        description = "Student records management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Students
        students::create_student,
        students::list_students,
        students::get_student,
        students::get_student_by_email,
        students::get_student_by_roll_number,
        students::list_students_by_course,
        students::list_students_by_semester,
        students::search_students,
        students::update_student,
        students::delete_student,
    ),
    components(
        schemas(
            crate::models::student::Student,
            crate::models::student::StudentData,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "students", description = "Student records management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
