pub mod employees;
pub mod leave_requests;
pub mod shared;
