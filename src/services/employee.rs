use chrono::{Datelike, NaiveDate};

use crate::database::models::{Employee, EmployeeInput, LeaveBalance};
use crate::database::repositories::{EmployeeRepository, LeaveRequestRepository};
use crate::error::AppError;
use crate::services::validation;

/// Allotment assigned to every newly registered employee.
pub const DEFAULT_ANNUAL_LEAVE_BALANCE: i32 = 30;

#[derive(Clone)]
pub struct EmployeeService {
    employees: EmployeeRepository,
    leave_requests: LeaveRequestRepository,
}

impl EmployeeService {
    pub fn new(employees: EmployeeRepository, leave_requests: LeaveRequestRepository) -> Self {
        Self {
            employees,
            leave_requests,
        }
    }

    /// Register an employee. Email is stored lowercased and department
    /// uppercased, both trimmed; uniqueness is checked against the
    /// normalized email so addresses differing only in case collide.
    pub async fn add_employee(
        &self,
        input: EmployeeInput,
        today: NaiveDate,
    ) -> Result<Employee, AppError> {
        validation::validate_employee_input(&input).map_err(AppError::Validation)?;

        let email = input.email.trim().to_lowercase();

        if self.employees.email_exists(&email).await? {
            return Err(AppError::BadRequest(format!(
                "Employee with email {} already exists",
                email
            )));
        }

        if input.joining_date > today {
            return Err(AppError::BadRequest(
                "Joining date cannot be in future".to_string(),
            ));
        }

        let department = input.department.trim().to_uppercase();

        let employee = self
            .employees
            .create(
                &input.name,
                &email,
                &department,
                input.joining_date,
                DEFAULT_ANNUAL_LEAVE_BALANCE,
            )
            .await?;

        log::info!("Registered employee {} ({})", employee.id, employee.email);

        Ok(employee)
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, AppError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee not found with ID: {}", id)))
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.find_all().await?)
    }

    /// Balance report for the calendar year of `today`: allotment, approved
    /// days used, and what remains. Pure read.
    pub async fn leave_balance(
        &self,
        employee_id: i64,
        today: NaiveDate,
    ) -> Result<LeaveBalance, AppError> {
        let employee = self.get_employee(employee_id).await?;

        let used = self
            .leave_requests
            .approved_days_for_year(self.leave_requests.pool(), employee_id, today.year())
            .await?;

        Ok(LeaveBalance {
            employee_id,
            employee_name: employee.name,
            total_allowed: employee.annual_leave_balance,
            used,
            remaining: employee.annual_leave_balance - used,
        })
    }
}
