pub mod employee;
pub mod leave_request;

pub use employee::EmployeeRepository;
pub use leave_request::LeaveRequestRepository;
