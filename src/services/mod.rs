pub mod employee;
pub mod leave;
pub mod leave_policy;
pub mod validation;

pub use employee::EmployeeService;
pub use leave::LeaveService;
