use actix_web::web;

use crate::handlers::leave_requests;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/leave-requests")
            .route("", web::post().to(leave_requests::apply_for_leave))
            .route("", web::get().to(leave_requests::get_leave_requests))
            .route(
                "/{id}/approve",
                web::put().to(leave_requests::approve_leave),
            )
            .route("/{id}/reject", web::put().to(leave_requests::reject_leave))
            .route(
                "/employee/{id}",
                web::get().to(leave_requests::get_leave_requests_for_employee),
            ),
    );
}
