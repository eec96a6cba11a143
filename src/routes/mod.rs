pub mod employees;
pub mod leave_requests;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(employees::configure)
            .configure(leave_requests::configure),
    );
}
