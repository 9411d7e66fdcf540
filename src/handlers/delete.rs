//! Delete screens: pick one row of an entity and remove it by identifier.
//! Rows still referenced elsewhere are rejected by the database and surface
//! as a classified foreign key violation, not a raw driver message.

use anyhow::Result;
use tracing::warn;

use crate::db::{DbAccess, Entity};
use crate::ui::{Choice, Collector, Prompter};

use super::{department_choices, employee_choices, report, role_choices};

/// Sub-choices of the "Delete" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteChoice {
    Employee,
    Role,
    Department,
}

impl DeleteChoice {
    pub const ALL: [DeleteChoice; 3] = [
        DeleteChoice::Employee,
        DeleteChoice::Role,
        DeleteChoice::Department,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DeleteChoice::Employee => "Delete Employee",
            DeleteChoice::Role => "Delete Role",
            DeleteChoice::Department => "Delete Department",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

/// Menu labels in definition order.
pub(crate) const LABELS: [&str; 3] = [
    DeleteChoice::Employee.label(),
    DeleteChoice::Role.label(),
    DeleteChoice::Department.label(),
];

pub async fn handle(db: &DbAccess, ui: &mut dyn Prompter, sub: &str) -> Result<()> {
    let Some(choice) = DeleteChoice::from_label(sub) else {
        warn!(choice = %sub, "unrecognized delete selection");
        return Ok(());
    };
    let (entity, title) = match choice {
        DeleteChoice::Employee => (Entity::Employee, "Delete Employee"),
        DeleteChoice::Role => (Entity::Role, "Delete Role"),
        DeleteChoice::Department => (Entity::Department, "Delete Department"),
    };
    let outcome = delete_row(db, ui, entity, title).await;
    report(ui, outcome)
}

/// Shared delete flow: the three entities differ only in their choice list,
/// banner title, and target table.
async fn delete_row(
    db: &DbAccess,
    ui: &mut dyn Prompter,
    entity: Entity,
    title: &str,
) -> Result<()> {
    let choices: Vec<Choice> = match entity {
        Entity::Employee => employee_choices(db).await?,
        Entity::Role => role_choices(db).await?,
        Entity::Department => department_choices(db).await?,
    };
    if choices.is_empty() {
        ui.show("\nThere is nothing to delete.");
        return ui.pause();
    }

    let mut form = Collector::begin(ui, title)?;
    let id = form.pick("Select the row to delete:", &choices)?;

    db.delete_by_id(entity, id).await?;
    ui.show("\nDeleted successfully.");
    ui.pause()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_labels_round_trip() {
        for choice in DeleteChoice::ALL {
            assert_eq!(DeleteChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(DeleteChoice::from_label("Delete Everything"), None);
    }
}
