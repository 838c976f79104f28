//! API integration tests
//!
//! These run against a live server backed by PostgreSQL.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Suffix that keeps unique columns unique across test runs
fn unique_suffix() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    format!("{}", nanos)
}

fn student_payload(first_name: &str, suffix: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Doe",
        "email": format!("{}.{}@x.com", first_name.to_lowercase(), suffix),
        "rollNumber": format!("R-{}-{}", first_name, suffix),
        "course": format!("CS-{}", suffix),
        "semester": 2,
        "phoneNumber": "555"
    })
}

/// Helper to create a student and return its body
async fn create_student(client: &Client, payload: &Value) -> Value {
    let response = client
        .post(format!("{}/api/students", BASE_URL))
        .json(payload)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse create response")
}

async fn delete_student(client: &Client, id: i64) -> StatusCode {
    client
        .delete(format!("{}/api/students/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request")
        .status()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_create_get_delete_lifecycle() {
    let client = Client::new();
    let payload = student_payload("Jane", &unique_suffix());

    let created = create_student(&client, &payload).await;
    let id = created["id"].as_i64().expect("No student ID");
    assert_eq!(created["email"], payload["email"]);

    let response = client
        .get(format!("{}/api/students/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    assert_eq!(delete_student(&client, id).await, StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/api/students/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.bytes().await.expect("No body").is_empty());

    // Second delete still succeeds
    assert_eq!(delete_student(&client, id).await, StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_fails() {
    let client = Client::new();
    let suffix = unique_suffix();
    let payload = student_payload("Dup", &suffix);

    let created = create_student(&client, &payload).await;
    let id = created["id"].as_i64().expect("No student ID");

    let mut clash = student_payload("Other", &suffix);
    clash["email"] = payload["email"].clone();
    let response = client
        .post(format!("{}/api/students", BASE_URL))
        .json(&clash)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    delete_student(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_lookup_by_email_roll_and_course() {
    let client = Client::new();
    let suffix = unique_suffix();
    let payload = student_payload("Lookup", &suffix);
    let created = create_student(&client, &payload).await;
    let id = created["id"].as_i64().expect("No student ID");

    let email = payload["email"].as_str().expect("email");
    let response = client
        .get(format!("{}/api/students/email/{}", BASE_URL, email))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let roll = payload["rollNumber"].as_str().expect("roll number");
    let response = client
        .get(format!("{}/api/students/roll/{}", BASE_URL, roll))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/api/students/roll/missing-{}", BASE_URL, suffix))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let course = payload["course"].as_str().expect("course");
    let body: Value = client
        .get(format!("{}/api/students/course/{}", BASE_URL, course))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    delete_student(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_search_by_first_name_is_case_insensitive() {
    let client = Client::new();
    let suffix = unique_suffix();
    let mut ids = Vec::new();
    for name in ["Anna", "Susan", "anthony", "Bob"] {
        let created = create_student(&client, &student_payload(name, &suffix)).await;
        ids.push(created["id"].as_i64().expect("No student ID"));
    }

    let body: Value = client
        .get(format!("{}/api/students/search/AN", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|s| s["firstName"].as_str())
        .collect();
    for expected in ["Anna", "Susan", "anthony"] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
    assert!(!names.contains(&"Bob"));

    for id in ids {
        delete_student(&client, id).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_update_overwrites_every_field() {
    let client = Client::new();
    let created = create_student(&client, &student_payload("Upd", &unique_suffix())).await;
    let id = created["id"].as_i64().expect("No student ID");

    let response = client
        .put(format!("{}/api/students/{}", BASE_URL, id))
        .json(&json!({ "firstName": "Updated", "semester": 5 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id);
    assert_eq!(body["firstName"], "Updated");
    assert_eq!(body["semester"], 5);
    assert!(body["email"].is_null());
    assert!(body["lastName"].is_null());

    delete_student(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_missing_student() {
    let client = Client::new();

    let response = client
        .put(format!("{}/api/students/{}", BASE_URL, i64::MAX))
        .json(&json!({ "firstName": "Ghost" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{}/api/students/{}", BASE_URL, i64::MAX))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
