//! Role reads and writes.

use rust_decimal::Decimal;

use crate::error::DbError;
use crate::models::{Role, RoleDetail};

use super::DbAccess;

impl DbAccess {
    /// Every role, ordered by identifier.
    pub async fn roles(&self) -> Result<Vec<Role>, DbError> {
        sqlx::query_as("SELECT id, title, salary, department_id FROM role ORDER BY id")
            .fetch_all(self.pool())
            .await
            .map_err(|err| DbError::from_sqlx(err, "listing roles", "role"))
    }

    /// Roles joined with their department's name, the shape the view screen
    /// displays.
    pub async fn role_details(&self) -> Result<Vec<RoleDetail>, DbError> {
        sqlx::query_as(
            "SELECT r.id, r.title, r.salary, d.name AS department
             FROM role r
             JOIN department d ON r.department_id = d.id
             ORDER BY r.id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "listing roles with departments", "role"))
    }

    /// Insert a role. A `department_id` that does not resolve is rejected by
    /// the database and surfaces as a foreign key violation.
    pub async fn add_role(
        &self,
        title: &str,
        salary: Decimal,
        department_id: i32,
    ) -> Result<Role, DbError> {
        sqlx::query_as(
            "INSERT INTO role (title, salary, department_id)
             VALUES ($1, $2, $3)
             RETURNING id, title, salary, department_id",
        )
        .bind(title)
        .bind(salary)
        .bind(department_id)
        .fetch_one(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "inserting a role", "role"))
    }
}
