//! Update screens: employee role and manager reassignment. These are the
//! only mutations the data model supports; everything else is add or delete.

use anyhow::Result;
use tracing::warn;

use crate::db::DbAccess;
use crate::ui::{Collector, Prompter};

use super::{employee_choices, report, role_choices};

/// Sub-choices of the "Update" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateChoice {
    EmployeeRole,
    EmployeeManager,
}

impl UpdateChoice {
    pub const ALL: [UpdateChoice; 2] = [UpdateChoice::EmployeeRole, UpdateChoice::EmployeeManager];

    pub const fn label(self) -> &'static str {
        match self {
            UpdateChoice::EmployeeRole => "Update Employee Role",
            UpdateChoice::EmployeeManager => "Update Employee Manager",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

/// Menu labels in definition order.
pub(crate) const LABELS: [&str; 2] = [
    UpdateChoice::EmployeeRole.label(),
    UpdateChoice::EmployeeManager.label(),
];

pub async fn handle(db: &DbAccess, ui: &mut dyn Prompter, sub: &str) -> Result<()> {
    let Some(choice) = UpdateChoice::from_label(sub) else {
        warn!(choice = %sub, "unrecognized update selection");
        return Ok(());
    };
    let outcome = match choice {
        UpdateChoice::EmployeeRole => update_employee_role(db, ui).await,
        UpdateChoice::EmployeeManager => update_employee_manager(db, ui).await,
    };
    report(ui, outcome)
}

async fn update_employee_role(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let employees = employee_choices(db).await?;
    if employees.is_empty() {
        ui.show("\nThere are no employees yet.");
        return ui.pause();
    }
    let roles = role_choices(db).await?;
    if roles.is_empty() {
        ui.show("\nThere are no roles yet; add a role first.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, "Update Employee Role")?;
    let employee_id = form.pick("Choose the employee:", &employees)?;
    let role_id = form.pick("Choose the new role:", &roles)?;

    db.update_employee_role(employee_id, role_id).await?;
    ui.show("\nEmployee role updated successfully.");
    ui.pause()
}

async fn update_employee_manager(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let employees = employee_choices(db).await?;
    if employees.is_empty() {
        ui.show("\nThere are no employees yet.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, "Update Employee Manager")?;
    let employee_id = form.pick("Choose the employee:", &employees)?;
    let manager_id = form.pick_optional("Choose the new manager:", &employees)?;

    db.update_employee_manager(employee_id, manager_id).await?;
    ui.show("\nEmployee manager updated successfully.");
    ui.pause()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_labels_round_trip() {
        for choice in UpdateChoice::ALL {
            assert_eq!(UpdateChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(UpdateChoice::from_label("Update Department"), None);
    }
}
