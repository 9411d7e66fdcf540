//! View screens: list queries rendered as bordered tables.

use anyhow::Result;
use tracing::warn;

use crate::db::DbAccess;
use crate::models::{Department, EmployeeDetail, RoleDetail};
use crate::ui::table::{format_currency, render};
use crate::ui::{Collector, Prompter};

use super::{department_choices, manager_choices, report};

/// Sub-choices of the "View" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChoice {
    AllEmployees,
    AllRoles,
    AllDepartments,
    EmployeesByManager,
    EmployeesByDepartment,
    DepartmentBudget,
}

impl ViewChoice {
    pub const ALL: [ViewChoice; 6] = [
        ViewChoice::AllEmployees,
        ViewChoice::AllRoles,
        ViewChoice::AllDepartments,
        ViewChoice::EmployeesByManager,
        ViewChoice::EmployeesByDepartment,
        ViewChoice::DepartmentBudget,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ViewChoice::AllEmployees => "View All Employees",
            ViewChoice::AllRoles => "View All Roles",
            ViewChoice::AllDepartments => "View All Departments",
            ViewChoice::EmployeesByManager => "View Employees by Manager",
            ViewChoice::EmployeesByDepartment => "View Employees by Department",
            ViewChoice::DepartmentBudget => "View Total Utilized Budget of a Department",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

/// Menu labels in definition order.
pub(crate) const LABELS: [&str; 6] = [
    ViewChoice::AllEmployees.label(),
    ViewChoice::AllRoles.label(),
    ViewChoice::AllDepartments.label(),
    ViewChoice::EmployeesByManager.label(),
    ViewChoice::EmployeesByDepartment.label(),
    ViewChoice::DepartmentBudget.label(),
];

pub async fn handle(db: &DbAccess, ui: &mut dyn Prompter, sub: &str) -> Result<()> {
    let Some(choice) = ViewChoice::from_label(sub) else {
        warn!(choice = %sub, "unrecognized view selection");
        return Ok(());
    };
    let outcome = run(db, ui, choice).await;
    report(ui, outcome)
}

async fn run(db: &DbAccess, ui: &mut dyn Prompter, choice: ViewChoice) -> Result<()> {
    match choice {
        ViewChoice::AllEmployees => {
            let rows = db.employee_details().await?;
            show_employees(ui, &rows)
        }
        ViewChoice::AllRoles => {
            let rows = db.role_details().await?;
            show_roles(ui, &rows)
        }
        ViewChoice::AllDepartments => {
            let rows = db.departments().await?;
            show_departments(ui, &rows)
        }
        ViewChoice::EmployeesByManager => employees_by_manager(db, ui).await,
        ViewChoice::EmployeesByDepartment => employees_by_department(db, ui).await,
        ViewChoice::DepartmentBudget => department_budget(db, ui).await,
    }
}

async fn employees_by_manager(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let managers = manager_choices(db).await?;
    if managers.is_empty() {
        ui.show("\nNo employee has a manager assigned yet.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, "View Employees by Manager")?;
    let manager_id = form.pick("Select the manager:", &managers)?;

    let rows = db.employees_by_manager(manager_id).await?;
    show_employees(ui, &rows)
}

async fn employees_by_department(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let departments = department_choices(db).await?;
    if departments.is_empty() {
        ui.show("\nThere are no departments yet.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, "View Employees by Department")?;
    let department_id = form.pick("Select the department:", &departments)?;

    let rows = db.employees_by_department(department_id).await?;
    show_employees(ui, &rows)
}

async fn department_budget(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let departments = department_choices(db).await?;
    if departments.is_empty() {
        ui.show("\nThere are no departments yet.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, "Total Utilized Budget")?;
    let department_id = form.pick("Select the department:", &departments)?;

    let headers = ["department", "total_utilized_budget"];
    let rows = match db.department_budget(department_id).await? {
        Some(budget) => vec![vec![
            budget.department,
            format_currency(budget.total_utilized_budget),
        ]],
        None => Vec::new(),
    };
    ui.show(&render(&headers, &rows));
    ui.pause()
}

fn show_employees(ui: &mut dyn Prompter, rows: &[EmployeeDetail]) -> Result<()> {
    let headers = [
        "id",
        "first_name",
        "last_name",
        "title",
        "department",
        "salary",
        "manager",
    ];
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                row.first_name.clone(),
                row.last_name.clone(),
                row.title.clone(),
                row.department.clone(),
                format_currency(row.salary),
                row.manager.clone().unwrap_or_default(),
            ]
        })
        .collect();
    ui.show(&render(&headers, &body));
    ui.pause()
}

fn show_roles(ui: &mut dyn Prompter, rows: &[RoleDetail]) -> Result<()> {
    let headers = ["id", "title", "salary", "department"];
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                row.title.clone(),
                format_currency(row.salary),
                row.department.clone(),
            ]
        })
        .collect();
    ui.show(&render(&headers, &body));
    ui.pause()
}

fn show_departments(ui: &mut dyn Prompter, rows: &[Department]) -> Result<()> {
    let headers = ["id", "name"];
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| vec![row.id.to_string(), row.name.clone()])
        .collect();
    ui.show(&render(&headers, &body));
    ui.pause()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::ScriptedPrompter;
    use rust_decimal::Decimal;

    #[test]
    fn view_labels_round_trip() {
        for choice in ViewChoice::ALL {
            assert_eq!(ViewChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(ViewChoice::from_label("View Everything"), None);
    }

    #[test]
    fn employee_table_shows_manager_only_when_present() {
        let rows = vec![
            EmployeeDetail {
                id: 1,
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                title: "Lead".into(),
                department: "Engineering".into(),
                salary: Decimal::from(120000),
                manager: None,
            },
            EmployeeDetail {
                id: 2,
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                title: "Engineer".into(),
                department: "Engineering".into(),
                salary: Decimal::from(90000),
                manager: Some("Ada Lovelace".into()),
            },
        ];
        let mut ui = ScriptedPrompter::new([]);
        show_employees(&mut ui, &rows).unwrap();

        let table = &ui.shown[0];
        assert!(table.contains("MANAGER"));
        assert!(table.contains("Ada Lovelace"));
        assert!(table.contains("$120,000.00"));
        assert_eq!(table.matches("Grace").count(), 1);
    }

    #[test]
    fn empty_employee_list_renders_the_informational_row() {
        let mut ui = ScriptedPrompter::new([]);
        show_employees(&mut ui, &[]).unwrap();
        assert!(ui.shown[0].contains("no records found"));
    }
}
