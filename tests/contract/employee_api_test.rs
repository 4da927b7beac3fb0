// Contract tests for the /api/employees HTTP surface
//
// Runs the full route table against the in-memory record store and checks
// status codes and payload shapes for every operation.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, App};
use ems::app;
use ems::employees::InMemoryEmployeeRepository;
use ems::middleware::{ErrorHandler, RequestId, REQUEST_ID_HEADER};
use ems::Employee;
use helpers::TestDataFactory;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .wrap(ErrorHandler)
                .wrap(RequestId)
                .app_data(app::service_data(Arc::new(InMemoryEmployeeRepository::new())))
                .configure(app::configure),
        )
        .await
    };
}

macro_rules! create_employee {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json($payload)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let employee: Employee = test::read_body_json(resp).await;
        employee
    }};
}

#[actix_web::test]
async fn test_create_employee_returns_created_record() {
    let app = init_app!();

    let employee = create_employee!(
        app,
        json!({"name": "John Doe", "department": "IT", "salary": 60000.0})
    );

    assert_eq!(employee.id, Some(1));
    assert_eq!(employee.name, "John Doe");
    assert_eq!(employee.department.as_deref(), Some("IT"));
    assert_eq!(employee.salary, dec!(60000));
}

#[actix_web::test]
async fn test_salary_is_returned_as_number() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({"name": "John Doe", "department": "IT", "salary": 60000.50}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["salary"].is_number(), "salary: {}", body["salary"]);

    let req = test::TestRequest::get().uri("/api/employees/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["salary"].is_number());
}

#[actix_web::test]
async fn test_create_employee_ignores_client_id() {
    let app = init_app!();

    let employee = create_employee!(
        app,
        json!({"id": 500, "name": "John Doe", "salary": 60000.0})
    );

    assert_eq!(employee.id, Some(1));
}

#[actix_web::test]
async fn test_create_employee_rejects_invalid_fields() {
    let app = init_app!();

    let payloads = [
        TestDataFactory::employee_payload_with(None, Some("IT"), 60000.0),
        TestDataFactory::employee_payload_with(Some(""), Some("IT"), 60000.0),
        TestDataFactory::employee_payload_with(Some("John Doe"), Some("IT"), 0.0),
        TestDataFactory::employee_payload_with(Some("John Doe"), Some("IT"), -1.0),
        TestDataFactory::employee_payload_with(Some("John Doe"), Some("IT"), 0.001),
        TestDataFactory::employee_payload_with(Some("John Doe"), Some("IT"), 1e15),
    ];

    for payload in payloads {
        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
    }

    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let all: Vec<Employee> = test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty(), "rejected creates must not be stored");
}

#[actix_web::test]
async fn test_create_employee_rejects_malformed_json() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"name": "John Doe", "salary": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_get_employee_by_id() {
    let app = init_app!();
    let created = create_employee!(app, TestDataFactory::employee_payload());

    let req = test::TestRequest::get()
        .uri(&format!("/api/employees/{}", created.id.unwrap()))
        .to_request();
    let found: Employee = test::call_and_read_body_json(&app, req).await;

    assert_eq!(found, created);
}

#[actix_web::test]
async fn test_get_missing_employee_returns_404() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/employees/99").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Employee 99"));
}

#[actix_web::test]
async fn test_non_numeric_id_returns_400() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/employees/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_employees() {
    let app = init_app!();
    create_employee!(
        app,
        json!({"name": "John Doe", "department": "IT", "salary": 60000.0})
    );
    create_employee!(
        app,
        json!({"name": "Jane Smith", "department": "HR", "salary": 70000.0})
    );

    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let all: Vec<Employee> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "John Doe");
    assert_eq!(all[1].name, "Jane Smith");
}

#[actix_web::test]
async fn test_update_employee() {
    let app = init_app!();
    let created = create_employee!(
        app,
        json!({"name": "John Doe", "department": "IT", "salary": 60000.0})
    );

    let req = test::TestRequest::put()
        .uri("/api/employees/1")
        .set_json(json!({"id": 7, "name": "Johnny Doe", "department": "IT", "salary": 65000.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Employee = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Johnny Doe");
    assert_eq!(updated.salary, dec!(65000));
}

#[actix_web::test]
async fn test_update_missing_employee_returns_404() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/api/employees/99")
        .set_json(json!({"name": "Non Existent", "department": "IT", "salary": 65000.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_employee() {
    let app = init_app!();
    let created = create_employee!(app, TestDataFactory::employee_payload());
    let uri = format!("/api/employees/{}", created.id.unwrap());

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/employees")
        .insert_header((REQUEST_ID_HEADER, "contract-req-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok()),
        Some("contract-req-1")
    );
}

#[actix_web::test]
async fn test_health_endpoints() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
