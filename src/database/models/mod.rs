pub mod employee;
pub mod leave_request;
mod macros;

pub use employee::{Employee, EmployeeInput, LeaveBalance};
pub use leave_request::{LeaveRequest, LeaveRequestInput, LeaveStatus};
