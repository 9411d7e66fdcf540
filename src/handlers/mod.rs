//! Menu handlers: translate a `{main, sub}` selection into data-access calls
//! and formatted output. Dispatch goes through closed enums rather than
//! string comparison at each site, so a new menu entry that lacks a handler
//! arm fails to compile instead of silently doing nothing.

mod add;
mod delete;
mod update;
mod view;

use anyhow::Result;
use tracing::warn;

use crate::app::LoopState;
use crate::db::DbAccess;
use crate::error::DbError;
use crate::ui::{Choice, MenuEntry, Prompter, Selection};

/// The top level of the cascading menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    View,
    Add,
    Update,
    Delete,
    Exit,
}

impl MainChoice {
    pub const ALL: [MainChoice; 5] = [
        MainChoice::View,
        MainChoice::Add,
        MainChoice::Update,
        MainChoice::Delete,
        MainChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainChoice::View => "View",
            MainChoice::Add => "Add",
            MainChoice::Update => "Update",
            MainChoice::Delete => "Delete",
            MainChoice::Exit => "Exit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }

    fn sub_choices(self) -> Vec<String> {
        let labels: &[&str] = match self {
            MainChoice::View => &view::LABELS,
            MainChoice::Add => &add::LABELS,
            MainChoice::Update => &update::LABELS,
            MainChoice::Delete => &delete::LABELS,
            MainChoice::Exit => &[],
        };
        labels.iter().map(|label| label.to_string()).collect()
    }
}

/// The full menu definition, derived from the choice enums so labels shown to
/// the operator and labels the handlers dispatch on cannot drift apart.
pub fn menu_definition() -> Vec<MenuEntry> {
    MainChoice::ALL
        .into_iter()
        .map(|choice| MenuEntry::new(choice.label(), choice.sub_choices()))
        .collect()
}

/// Route one menu pass to its handler. An unrecognized main choice is logged
/// and ignored; "Exit" flips the application loop to its terminal state.
pub async fn dispatch(
    db: &DbAccess,
    ui: &mut dyn Prompter,
    selection: &Selection,
) -> Result<LoopState> {
    match MainChoice::from_label(&selection.main) {
        Some(MainChoice::View) => view::handle(db, ui, &selection.sub).await?,
        Some(MainChoice::Add) => add::handle(db, ui, &selection.sub).await?,
        Some(MainChoice::Update) => update::handle(db, ui, &selection.sub).await?,
        Some(MainChoice::Delete) => delete::handle(db, ui, &selection.sub).await?,
        Some(MainChoice::Exit) => return Ok(LoopState::Terminated),
        None => warn!(choice = %selection.main, "unrecognized menu selection"),
    }
    Ok(LoopState::Prompting)
}

/// Translate the outcome of one handler action into operator feedback.
/// Classified database failures are explained, paused on, and swallowed so a
/// failed operation never ends the session; anything outside the [`DbError`]
/// taxonomy (a broken terminal, mostly) propagates to the application loop.
pub(crate) fn report(ui: &mut dyn Prompter, result: Result<()>) -> Result<()> {
    let err = match result {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    let explanation = match err.downcast_ref::<DbError>() {
        Some(DbError::ForeignKey { .. }) => {
            "A foreign key constraint was violated; check your inputs.".to_string()
        }
        Some(DbError::NotNull { .. }) => {
            "A required field is missing; nothing was saved.".to_string()
        }
        Some(_) => format!("{err:#}"),
        None => return Err(err),
    };

    ui.show(&format!("\n{explanation}"));
    ui.pause()
}

/// Selection list of all employees, labelled by full name.
pub(crate) async fn employee_choices(db: &DbAccess) -> Result<Vec<Choice>, DbError> {
    Ok(db
        .employees()
        .await?
        .into_iter()
        .map(|employee| Choice {
            id: employee.id,
            label: employee.full_name(),
        })
        .collect())
}

/// Selection list of all roles, labelled by title.
pub(crate) async fn role_choices(db: &DbAccess) -> Result<Vec<Choice>, DbError> {
    Ok(db
        .roles()
        .await?
        .into_iter()
        .map(|role| Choice {
            id: role.id,
            label: role.title,
        })
        .collect())
}

/// Selection list of all departments, labelled by name.
pub(crate) async fn department_choices(db: &DbAccess) -> Result<Vec<Choice>, DbError> {
    Ok(db
        .departments()
        .await?
        .into_iter()
        .map(|department| Choice {
            id: department.id,
            label: department.name,
        })
        .collect())
}

/// Selection list of current managers only.
pub(crate) async fn manager_choices(db: &DbAccess) -> Result<Vec<Choice>, DbError> {
    Ok(db
        .managers()
        .await?
        .into_iter()
        .map(|manager| Choice {
            id: manager.id,
            label: manager.name,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::ScriptedPrompter;

    #[test]
    fn main_labels_round_trip() {
        for choice in MainChoice::ALL {
            assert_eq!(MainChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(MainChoice::from_label("Quit"), None);
    }

    #[test]
    fn definition_lists_exit_without_sub_choices() {
        let definition = menu_definition();
        assert_eq!(definition.len(), 5);
        let exit = definition.last().unwrap();
        assert_eq!(exit.name, "Exit");
        assert!(exit.sub_choices.is_empty());
        assert_eq!(definition[0].sub_choices.len(), view::LABELS.len());
    }

    #[test]
    fn foreign_key_failures_are_explained_and_swallowed() {
        let mut ui = ScriptedPrompter::new([]);
        let err = DbError::ForeignKey {
            operation: "inserting a role",
            table: "role",
            source: sqlx::Error::RowNotFound,
        };

        report(&mut ui, Err(err.into())).unwrap();

        assert!(ui.shown[0].contains("check your inputs"));
        assert_eq!(ui.pause_calls, 1);
    }

    #[test]
    fn not_null_failures_name_the_missing_field_problem() {
        let mut ui = ScriptedPrompter::new([]);
        let err = DbError::NotNull {
            operation: "inserting an employee",
            table: "employee",
            source: sqlx::Error::RowNotFound,
        };

        report(&mut ui, Err(err.into())).unwrap();

        assert!(ui.shown[0].contains("required field"));
        assert_eq!(ui.pause_calls, 1);
    }

    #[test]
    fn other_database_failures_are_shown_raw_and_swallowed() {
        let mut ui = ScriptedPrompter::new([]);
        let err = DbError::Query {
            operation: "listing roles",
            table: "role",
            source: sqlx::Error::RowNotFound,
        };

        report(&mut ui, Err(err.into())).unwrap();

        assert!(ui.shown[0].contains("listing roles"));
        assert!(ui.shown[0].contains("role"));
        assert_eq!(ui.pause_calls, 1);
    }

    #[test]
    fn success_reports_nothing() {
        let mut ui = ScriptedPrompter::new([]);
        report(&mut ui, Ok(())).unwrap();
        assert!(ui.shown.is_empty());
        assert_eq!(ui.pause_calls, 0);
    }

    #[test]
    fn non_database_errors_propagate_instead_of_being_swallowed() {
        let mut ui = ScriptedPrompter::new([]);
        let err = report(&mut ui, Err(anyhow::anyhow!("terminal unplugged"))).unwrap_err();

        assert!(err.to_string().contains("terminal unplugged"));
        assert!(ui.shown.is_empty());
        assert_eq!(ui.pause_calls, 0);
    }
}
