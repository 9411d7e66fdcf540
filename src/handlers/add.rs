//! Add screens: gather fields for one new row, insert it, and confirm with
//! the assigned identifier.

use anyhow::Result;
use tracing::warn;

use crate::db::DbAccess;
use crate::ui::{Collector, Prompter};

use super::{department_choices, employee_choices, report, role_choices};

/// Sub-choices of the "Add" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddChoice {
    Employee,
    Role,
    Department,
}

impl AddChoice {
    pub const ALL: [AddChoice; 3] = [AddChoice::Employee, AddChoice::Role, AddChoice::Department];

    pub const fn label(self) -> &'static str {
        match self {
            AddChoice::Employee => "Add Employee",
            AddChoice::Role => "Add Role",
            AddChoice::Department => "Add Department",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

/// Menu labels in definition order.
pub(crate) const LABELS: [&str; 3] = [
    AddChoice::Employee.label(),
    AddChoice::Role.label(),
    AddChoice::Department.label(),
];

pub async fn handle(db: &DbAccess, ui: &mut dyn Prompter, sub: &str) -> Result<()> {
    let Some(choice) = AddChoice::from_label(sub) else {
        warn!(choice = %sub, "unrecognized add selection");
        return Ok(());
    };
    let outcome = match choice {
        AddChoice::Employee => add_employee(db, ui).await,
        AddChoice::Role => add_role(db, ui).await,
        AddChoice::Department => add_department(db, ui).await,
    };
    report(ui, outcome)
}

async fn add_employee(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let roles = role_choices(db).await?;
    if roles.is_empty() {
        ui.show("\nThere are no roles yet; add a role first.");
        return ui.pause();
    }
    // Managers are just employees, so the manager list is the employee list
    // with an explicit "None" entry at the top.
    let managers = employee_choices(db).await?;

    let mut form = Collector::begin(ui, "Add Employee")?;
    let first_name = form.text("Enter the first name:")?;
    let last_name = form.text("Enter the last name:")?;
    let role_id = form.pick("Choose the role:", &roles)?;
    let manager_id = form.pick_optional("Choose the manager:", &managers)?;

    let employee = db
        .add_employee(&first_name, &last_name, role_id, manager_id)
        .await?;
    ui.show(&format!(
        "\n{} added successfully (id {}).",
        employee.full_name(),
        employee.id
    ));
    ui.pause()
}

async fn add_role(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let departments = department_choices(db).await?;
    if departments.is_empty() {
        ui.show("\nThere are no departments yet; add a department first.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, "Add Role")?;
    let title = form.text("Enter the role title:")?;
    let Some(salary) = form.amount("Enter the role salary:")? else {
        return ui.pause();
    };
    let department_id = form.pick("Choose the department:", &departments)?;

    let role = db.add_role(&title, salary, department_id).await?;
    ui.show(&format!(
        "\n{} added successfully (id {}).",
        role.title, role.id
    ));
    ui.pause()
}

async fn add_department(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let mut form = Collector::begin(ui, "Add Department")?;
    let name = form.text("Enter the department name:")?;

    let department = db.add_department(&name).await?;
    ui.show(&format!(
        "\n{} added successfully (id {}).",
        department.name, department.id
    ));
    ui.pause()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_labels_round_trip() {
        for choice in AddChoice::ALL {
            assert_eq!(AddChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(AddChoice::from_label("Add Manager"), None);
    }
}
