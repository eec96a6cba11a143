use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::database::models::LeaveRequestInput;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::LeaveService;

pub async fn apply_for_leave(
    service: web::Data<LeaveService>,
    input: web::Json<LeaveRequestInput>,
) -> Result<HttpResponse, AppError> {
    let today = Utc::now().date_naive();
    let request = service.apply(input.into_inner(), today).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(request)))
}

pub async fn approve_leave(
    service: web::Data<LeaveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let today = Utc::now().date_naive();
    let request = service.approve(path.into_inner(), today).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}

pub async fn reject_leave(
    service: web::Data<LeaveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let request = service.reject(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}

pub async fn get_leave_requests(
    service: web::Data<LeaveService>,
) -> Result<HttpResponse, AppError> {
    let requests = service.list().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}

pub async fn get_leave_requests_for_employee(
    service: web::Data<LeaveService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let requests = service.list_for_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}
