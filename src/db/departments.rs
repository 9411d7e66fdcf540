//! Department reads, writes, and the budget aggregate.

use crate::error::DbError;
use crate::models::{Department, DepartmentBudget};

use super::DbAccess;

impl DbAccess {
    /// Every department, ordered by identifier.
    pub async fn departments(&self) -> Result<Vec<Department>, DbError> {
        sqlx::query_as("SELECT id, name FROM department ORDER BY id")
            .fetch_all(self.pool())
            .await
            .map_err(|err| DbError::from_sqlx(err, "listing departments", "department"))
    }

    /// Insert a department and return the hydrated row so the caller can show
    /// the assigned identifier without re-querying.
    pub async fn add_department(&self, name: &str) -> Result<Department, DbError> {
        sqlx::query_as("INSERT INTO department (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(self.pool())
            .await
            .map_err(|err| DbError::from_sqlx(err, "inserting a department", "department"))
    }

    /// Sum of the salaries of roles held by the department's employees.
    /// `None` when no employee holds a role there; the caller decides how to
    /// present that. Currency formatting happens in the display layer.
    pub async fn department_budget(
        &self,
        department_id: i32,
    ) -> Result<Option<DepartmentBudget>, DbError> {
        sqlx::query_as(
            "SELECT d.name AS department, SUM(r.salary) AS total_utilized_budget
             FROM employee e
             JOIN role r ON e.role_id = r.id
             JOIN department d ON r.department_id = d.id
             WHERE d.id = $1
             GROUP BY d.name",
        )
        .bind(department_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "totalling the department budget", "department"))
    }
}
