use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;

use lms::database::{
    init_database,
    repositories::{EmployeeRepository, LeaveRequestRepository},
};
use lms::middleware::RequestId;
use lms::services::{EmployeeService, LeaveService};
use lms::{routes, Config};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Leave Management API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    log::info!("Configuration loaded (environment: {})", config.environment);

    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    let employee_repository = EmployeeRepository::new(pool.clone());
    let leave_request_repository = LeaveRequestRepository::new(pool.clone());

    let employee_service = web::Data::new(EmployeeService::new(
        employee_repository.clone(),
        leave_request_repository.clone(),
    ));
    let leave_service = web::Data::new(LeaveService::new(
        employee_repository,
        leave_request_repository,
    ));
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(employee_service.clone())
            .app_data(leave_service.clone())
            .app_data(config_data.clone())
            .wrap(Cors::permissive())
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
