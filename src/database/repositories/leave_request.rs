use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sqlx::{PgConnection, PgPool};

use crate::database::{
    models::{LeaveRequest, LeaveStatus},
    utils::sql,
};

#[derive(Clone)]
pub struct LeaveRequestRepository {
    pool: PgPool,
}

impl LeaveRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new pending request. Runs on the transaction that holds the
    /// employee row lock so the balance/overlap checks and the write commit
    /// as one unit. Timestamps are assigned here, never by the caller.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        employee_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days: i32,
        reason: Option<&str>,
    ) -> Result<LeaveRequest> {
        let now = Utc::now();

        let request = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            INSERT INTO
                leave_requests (
                    employee_id,
                    start_date,
                    end_date,
                    days,
                    reason,
                    status,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
        "#))
        .bind(employee_id)
        .bind(start_date)
        .bind(end_date)
        .bind(days)
        .bind(reason)
        .bind(LeaveStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(conn)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<LeaveRequest>> {
        let request = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            SELECT
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
            FROM
                leave_requests
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// Row-locking lookup used by approve/reject so two concurrent status
    /// transitions on the same request serialize instead of both seeing
    /// `pending`.
    pub async fn find_by_id_locked(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> Result<Option<LeaveRequest>> {
        let request = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            SELECT
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
            FROM
                leave_requests
            WHERE
                id = ?
            FOR UPDATE
        "#))
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(request)
    }

    pub async fn find_all(&self) -> Result<Vec<LeaveRequest>> {
        let requests = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            SELECT
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
            FROM
                leave_requests
            ORDER BY
                created_at DESC
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn find_by_employee(&self, employee_id: i64) -> Result<Vec<LeaveRequest>> {
        let requests = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            SELECT
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
            FROM
                leave_requests
            WHERE
                employee_id = ?
            ORDER BY
                created_at DESC
        "#))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// Sum of approved days for requests whose start date falls in `year`.
    /// Recomputed fresh on every call so balance checks always reflect the
    /// current set of approved requests.
    pub async fn approved_days_for_year<'e>(
        &self,
        executor: impl sqlx::PgExecutor<'e>,
        employee_id: i64,
        year: i32,
    ) -> Result<i32> {
        let used = sqlx::query_scalar::<_, i64>(&sql(r#"
            SELECT
                COALESCE(SUM(days), 0)
            FROM
                leave_requests
            WHERE
                employee_id = ?
                AND status = 'approved'
                AND EXTRACT(YEAR FROM start_date)::INT = ?
        "#))
        .bind(employee_id)
        .bind(year)
        .fetch_one(executor)
        .await?;

        Ok(used as i32)
    }

    /// Approved requests of the employee sharing at least one calendar day
    /// with [start_date, end_date], inclusive on both bounds. Pending and
    /// rejected requests never block a new application.
    pub async fn find_overlapping_approved(
        &self,
        conn: &mut PgConnection,
        employee_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<LeaveRequest>> {
        let requests = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            SELECT
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
            FROM
                leave_requests
            WHERE
                employee_id = ?
                AND status = 'approved'
                AND start_date <= ?
                AND end_date >= ?
        "#))
        .bind(employee_id)
        .bind(end_date)
        .bind(start_date)
        .fetch_all(conn)
        .await?;

        Ok(requests)
    }

    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: i64,
        status: LeaveStatus,
    ) -> Result<LeaveRequest> {
        let now = Utc::now();

        let request = sqlx::query_as::<_, LeaveRequest>(&sql(r#"
            UPDATE
                leave_requests
            SET
                status = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                employee_id,
                start_date,
                end_date,
                days,
                reason,
                status,
                created_at,
                updated_at
        "#))
        .bind(status)
        .bind(now)
        .bind(id)
        .fetch_one(conn)
        .await?;

        Ok(request)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
