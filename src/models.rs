//! Domain models mirroring the PostgreSQL schema plus the joined shapes the
//! view screens display. These stay light-weight data holders so the
//! persistence and presentation layers can focus on their own logic.

use rust_decimal::Decimal;
use sqlx::FromRow;

/// A department row. `name` is unique in practice, though only the database
/// schema enforces anything about it.
#[derive(Debug, Clone, FromRow)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// A role row. `department_id` must reference an existing department; the
/// database rejects inserts that do not.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: i32,
    pub title: String,
    pub salary: Decimal,
    pub department_id: i32,
}

/// An employee row. `manager_id` is nullable and self-referential, forming a
/// reporting tree; `None` means "no manager".
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

impl Employee {
    /// Join first and last name for selection lists and log lines.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employee joined with role title, department name, salary, and manager full
/// name. `manager` is populated through a LEFT JOIN, so employees at the top
/// of the tree still appear, with `None` here.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeDetail {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
    pub manager: Option<String>,
}

/// Role joined with its department's name.
#[derive(Debug, Clone, FromRow)]
pub struct RoleDetail {
    pub id: i32,
    pub title: String,
    pub salary: Decimal,
    pub department: String,
}

/// An employee who is referenced as somebody's manager, with a ready-made
/// display name.
#[derive(Debug, Clone, FromRow)]
pub struct Manager {
    pub id: i32,
    pub name: String,
}

/// Aggregate salary total for one department's employees.
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentBudget {
    pub department: String,
    pub total_utilized_budget: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_a_space() {
        let employee = Employee {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role_id: 2,
            manager_id: None,
        };
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }
}
