use chrono::{Datelike, NaiveDate};

use crate::database::models::{LeaveRequest, LeaveRequestInput, LeaveStatus};
use crate::database::repositories::{EmployeeRepository, LeaveRequestRepository};
use crate::error::AppError;
use crate::services::leave_policy::{self, PolicyError};

#[derive(Clone)]
pub struct LeaveService {
    employees: EmployeeRepository,
    leave_requests: LeaveRequestRepository,
}

impl LeaveService {
    pub fn new(employees: EmployeeRepository, leave_requests: LeaveRequestRepository) -> Self {
        Self {
            employees,
            leave_requests,
        }
    }

    /// File a new leave request. All checks and the insert run in one
    /// transaction holding the employee row lock, so concurrent applications
    /// and approvals for the same employee cannot both read a stale balance.
    /// The first failing check aborts with nothing written.
    pub async fn apply(
        &self,
        input: LeaveRequestInput,
        today: NaiveDate,
    ) -> Result<LeaveRequest, AppError> {
        let mut tx = self.leave_requests.pool().begin().await?;

        let employee = self
            .employees
            .find_by_id_locked(&mut tx, input.employee_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Employee not found with ID: {}", input.employee_id))
            })?;

        leave_policy::validate_date_range(input.start_date, input.end_date, today)?;
        leave_policy::validate_joining_date(input.start_date, employee.joining_date)?;

        let days = leave_policy::leave_days(input.start_date, input.end_date);

        let used = self
            .leave_requests
            .approved_days_for_year(&mut *tx, employee.id, today.year())
            .await?;
        leave_policy::check_balance(employee.annual_leave_balance, used, days)?;

        let overlapping = self
            .leave_requests
            .find_overlapping_approved(&mut tx, employee.id, input.start_date, input.end_date)
            .await?;
        if !overlapping.is_empty() {
            return Err(PolicyError::Overlapping.into());
        }

        let request = self
            .leave_requests
            .create(
                &mut tx,
                employee.id,
                input.start_date,
                input.end_date,
                days,
                input.reason.as_deref(),
            )
            .await?;

        tx.commit().await?;

        log::info!(
            "Leave request {} filed for employee {} ({} days)",
            request.id,
            request.employee_id,
            request.days
        );

        Ok(request)
    }

    /// Approve a pending request. The balance is re-checked here: other
    /// approvals may have consumed it since the request was filed, in which
    /// case the stale request is turned away even though it was admissible
    /// at apply time.
    pub async fn approve(&self, id: i64, today: NaiveDate) -> Result<LeaveRequest, AppError> {
        let mut tx = self.leave_requests.pool().begin().await?;

        let request = self
            .leave_requests
            .find_by_id_locked(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Leave request not found with ID: {}", id)))?;

        if request.status != LeaveStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Leave request is already {}",
                request.status
            )));
        }

        let employee = self
            .employees
            .find_by_id_locked(&mut tx, request.employee_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Employee not found with ID: {}",
                    request.employee_id
                ))
            })?;

        let used = self
            .leave_requests
            .approved_days_for_year(&mut *tx, employee.id, today.year())
            .await?;
        leave_policy::check_balance(employee.annual_leave_balance, used, request.days)?;

        let approved = self
            .leave_requests
            .set_status(&mut tx, id, LeaveStatus::Approved)
            .await?;

        tx.commit().await?;

        log::info!("Leave request {} approved", id);

        Ok(approved)
    }

    /// Reject a pending request. No balance is consulted; rejection never
    /// affects totals.
    pub async fn reject(&self, id: i64) -> Result<LeaveRequest, AppError> {
        let mut tx = self.leave_requests.pool().begin().await?;

        let request = self
            .leave_requests
            .find_by_id_locked(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Leave request not found with ID: {}", id)))?;

        if request.status != LeaveStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Leave request is already {}",
                request.status
            )));
        }

        let rejected = self
            .leave_requests
            .set_status(&mut tx, id, LeaveStatus::Rejected)
            .await?;

        tx.commit().await?;

        log::info!("Leave request {} rejected", id);

        Ok(rejected)
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, AppError> {
        Ok(self.leave_requests.find_all().await?)
    }

    pub async fn list_for_employee(&self, employee_id: i64) -> Result<Vec<LeaveRequest>, AppError> {
        if self.employees.find_by_id(employee_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Employee not found with ID: {}",
                employee_id
            )));
        }

        Ok(self.leave_requests.find_by_employee(employee_id).await?)
    }
}
