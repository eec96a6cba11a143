#![allow(dead_code)]

use std::env;

use chrono::NaiveDate;
use sqlx::PgPool;

use lms::database::init_database;
use lms::database::models::{EmployeeInput, LeaveRequestInput};
use lms::database::repositories::{EmployeeRepository, LeaveRequestRepository};
use lms::services::{EmployeeService, LeaveService};

pub struct TestApp {
    pub pool: PgPool,
    pub employees: EmployeeService,
    pub leaves: LeaveService,
}

/// Connect to the database named by TEST_DATABASE_URL, run migrations, and
/// truncate both tables. Returns None (so the caller can skip) when the
/// variable is not set.
pub async fn setup() -> Option<TestApp> {
    let _ = env_logger::builder().is_test(true).try_init();

    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping database-backed test");
        return None;
    };

    let pool = init_database(&database_url)
        .await
        .expect("Failed to initialize test database");

    sqlx::query("TRUNCATE leave_requests, employees RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to reset test tables");

    let employee_repository = EmployeeRepository::new(pool.clone());
    let leave_request_repository = LeaveRequestRepository::new(pool.clone());

    Some(TestApp {
        pool: pool.clone(),
        employees: EmployeeService::new(
            employee_repository.clone(),
            leave_request_repository.clone(),
        ),
        leaves: LeaveService::new(employee_repository, leave_request_repository),
    })
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn employee_input(name: &str, email: &str, department: &str) -> EmployeeInput {
    EmployeeInput {
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        joining_date: date(2023, 1, 1),
    }
}

pub fn leave_input(
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    reason: &str,
) -> LeaveRequestInput {
    LeaveRequestInput {
        employee_id,
        start_date: start,
        end_date: end,
        reason: Some(reason.to_string()),
    }
}
