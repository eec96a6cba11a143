use anyhow::Result;
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::database::{models::Employee, utils::sql};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new employee. The store assigns the id; the caller is
    /// expected to have normalized email and department already.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        department: &str,
        joining_date: NaiveDate,
        annual_leave_balance: i32,
    ) -> Result<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&sql(r#"
            INSERT INTO
                employees (name, email, department, joining_date, annual_leave_balance)
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id,
                name,
                email,
                department,
                joining_date,
                annual_leave_balance
        "#))
        .bind(name)
        .bind(email)
        .bind(department)
        .bind(joining_date)
        .bind(annual_leave_balance)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&sql(r#"
            SELECT
                id,
                name,
                email,
                department,
                joining_date,
                annual_leave_balance
            FROM
                employees
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Row-locking lookup used inside the apply/approve transactions.
    /// Holding the employee row serializes concurrent balance decisions
    /// for the same employee until the transaction commits.
    pub async fn find_by_id_locked(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&sql(r#"
            SELECT
                id,
                name,
                email,
                department,
                joining_date,
                annual_leave_balance
            FROM
                employees
            WHERE
                id = ?
            FOR UPDATE
        "#))
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(employee)
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&sql(r#"
            SELECT
                id,
                name,
                email,
                department,
                joining_date,
                annual_leave_balance
            FROM
                employees
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(&sql(r#"
            SELECT EXISTS (SELECT 1 FROM employees WHERE email = ?)
        "#))
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
