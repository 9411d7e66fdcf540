//! Employee reads, the joined display shapes, and the employee writes.

use crate::error::DbError;
use crate::models::{Employee, EmployeeDetail, Manager};

use super::DbAccess;

impl DbAccess {
    /// Every employee, ordered by identifier. Used mostly to build selection
    /// lists; the view screens prefer the joined shape below.
    pub async fn employees(&self) -> Result<Vec<Employee>, DbError> {
        sqlx::query_as(
            "SELECT id, first_name, last_name, role_id, manager_id
             FROM employee
             ORDER BY id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "listing employees", "employee"))
    }

    /// Employees joined with role title, department name, salary, and manager
    /// full name. The manager side is a LEFT JOIN so employees without a
    /// manager still appear, with a null manager column.
    pub async fn employee_details(&self) -> Result<Vec<EmployeeDetail>, DbError> {
        sqlx::query_as(
            "SELECT e.id, e.first_name, e.last_name, r.title, d.name AS department,
                    r.salary, m.first_name || ' ' || m.last_name AS manager
             FROM employee e
             JOIN role r ON e.role_id = r.id
             JOIN department d ON r.department_id = d.id
             LEFT JOIN employee m ON e.manager_id = m.id
             ORDER BY e.id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "listing employees with details", "employee"))
    }

    /// The joined shape filtered to one manager's reports.
    pub async fn employees_by_manager(
        &self,
        manager_id: i32,
    ) -> Result<Vec<EmployeeDetail>, DbError> {
        sqlx::query_as(
            "SELECT e.id, e.first_name, e.last_name, r.title, d.name AS department,
                    r.salary, m.first_name || ' ' || m.last_name AS manager
             FROM employee e
             JOIN role r ON e.role_id = r.id
             JOIN department d ON r.department_id = d.id
             LEFT JOIN employee m ON e.manager_id = m.id
             WHERE e.manager_id = $1
             ORDER BY e.id",
        )
        .bind(manager_id)
        .fetch_all(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "listing employees by manager", "employee"))
    }

    /// The joined shape filtered to one department, resolved via each
    /// employee's role.
    pub async fn employees_by_department(
        &self,
        department_id: i32,
    ) -> Result<Vec<EmployeeDetail>, DbError> {
        sqlx::query_as(
            "SELECT e.id, e.first_name, e.last_name, r.title, d.name AS department,
                    r.salary, m.first_name || ' ' || m.last_name AS manager
             FROM employee e
             JOIN role r ON e.role_id = r.id
             JOIN department d ON r.department_id = d.id
             LEFT JOIN employee m ON e.manager_id = m.id
             WHERE d.id = $1
             ORDER BY e.id",
        )
        .bind(department_id)
        .fetch_all(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "listing employees by department", "employee"))
    }

    /// Distinct employees referenced as a manager by at least one other
    /// employee, with a ready-made display name.
    pub async fn managers(&self) -> Result<Vec<Manager>, DbError> {
        sqlx::query_as(
            "SELECT DISTINCT m.id, m.first_name || ' ' || m.last_name AS name
             FROM employee e
             JOIN employee m ON e.manager_id = m.id
             ORDER BY name",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "listing managers", "employee"))
    }

    /// Insert an employee. `manager_id` may be `None` for employees at the
    /// top of the reporting tree.
    pub async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i32,
        manager_id: Option<i32>,
    ) -> Result<Employee, DbError> {
        sqlx::query_as(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, first_name, last_name, role_id, manager_id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(role_id)
        .bind(manager_id)
        .fetch_one(self.pool())
        .await
        .map_err(|err| DbError::from_sqlx(err, "inserting an employee", "employee"))
    }

    /// Point an employee at a different role.
    pub async fn update_employee_role(
        &self,
        employee_id: i32,
        role_id: i32,
    ) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE employee SET role_id = $1 WHERE id = $2")
            .bind(role_id)
            .bind(employee_id)
            .execute(self.pool())
            .await
            .map_err(|err| DbError::from_sqlx(err, "updating an employee's role", "employee"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                table: "employee",
                id: employee_id,
            });
        }
        Ok(())
    }

    /// Point an employee at a different manager, or at no manager at all.
    /// Cycles are not validated here; the reporting tree is the operator's
    /// responsibility.
    pub async fn update_employee_manager(
        &self,
        employee_id: i32,
        manager_id: Option<i32>,
    ) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE employee SET manager_id = $1 WHERE id = $2")
            .bind(manager_id)
            .bind(employee_id)
            .execute(self.pool())
            .await
            .map_err(|err| {
                DbError::from_sqlx(err, "updating an employee's manager", "employee")
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                table: "employee",
                id: employee_id,
            });
        }
        Ok(())
    }
}
