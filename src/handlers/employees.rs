use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::database::models::EmployeeInput;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::EmployeeService;

pub async fn register_employee(
    service: web::Data<EmployeeService>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let today = Utc::now().date_naive();
    let employee = service.add_employee(input.into_inner(), today).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(employee)))
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_employees().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employees)))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn get_leave_balance(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let today = Utc::now().date_naive();
    let balance = service.leave_balance(path.into_inner(), today).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(balance)))
}
