mod common;

use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serial_test::serial;

use common::setup;
use lms::database::models::Employee;
use lms::handlers::shared::ApiResponse;
use lms::middleware::RequestId;
use lms::routes;

macro_rules! test_app {
    ($app:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($app.employees.clone()))
                .app_data(web::Data::new($app.leaves.clone()))
                .wrap(RequestId)
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_rt::test]
#[serial]
async fn register_employee_returns_created_record() {
    let Some(app) = setup().await else { return };
    let srv = test_app!(app);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(serde_json::json!({
            "name": "Jane Doe",
            "email": "Jane.Doe@Example.com",
            "department": "engineering",
            "joiningDate": "2023-01-01"
        }))
        .to_request();
    let resp = test::call_service(&srv, req).await;

    assert_eq!(resp.status(), 201);
    let body: ApiResponse<Employee> = test::read_body_json(resp).await;
    assert!(body.success);
    let employee = body.data.unwrap();
    assert_eq!(employee.email, "jane.doe@example.com");
    assert_eq!(employee.department, "ENGINEERING");
    assert_eq!(employee.annual_leave_balance, 30);
}

#[actix_rt::test]
#[serial]
async fn unknown_employee_renders_not_found_envelope() {
    let Some(app) = setup().await else { return };
    let srv = test_app!(app);

    let req = test::TestRequest::get()
        .uri("/api/employees/999")
        .to_request();
    let resp = test::call_service(&srv, req).await;

    assert_eq!(resp.status(), 404);
    let body: ApiResponse<Employee> = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.message.unwrap().contains("Employee not found"));
}

#[actix_rt::test]
#[serial]
async fn blank_fields_render_violation_list() {
    let Some(app) = setup().await else { return };
    let srv = test_app!(app);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(serde_json::json!({
            "name": "",
            "email": "not-an-email",
            "department": "HR",
            "joiningDate": "2023-01-01"
        }))
        .to_request();
    let resp = test::call_service(&srv, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    let violations = body["data"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["field"], "name");
    assert_eq!(violations[1]["field"], "email");
}

#[actix_rt::test]
#[serial]
async fn retroactive_leave_application_is_a_bad_request() {
    let Some(app) = setup().await else { return };
    let srv = test_app!(app);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "department": "HR",
            "joiningDate": "2023-01-01"
        }))
        .to_request();
    let resp = test::call_service(&srv, req).await;
    let body: ApiResponse<Employee> = test::read_body_json(resp).await;
    let employee = body.data.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/leave-requests")
        .set_json(serde_json::json!({
            "employeeId": employee.id,
            "startDate": "2020-01-01",
            "endDate": "2020-01-05",
            "reason": "too late"
        }))
        .to_request();
    let resp = test::call_service(&srv, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("past dates"));
}

#[actix_rt::test]
#[serial]
async fn responses_echo_a_correlation_id() {
    let Some(app) = setup().await else { return };
    let srv = test_app!(app);

    let req = test::TestRequest::get()
        .uri("/api/employees")
        .insert_header(("X-Correlation-ID", "abc-123"))
        .to_request();
    let resp = test::call_service(&srv, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("x-correlation-id").unwrap(),
        "abc-123"
    );
}
