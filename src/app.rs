//! The application loop: a two-state machine that keeps resolving menu
//! selections and dispatching them to handlers until the operator selects
//! "Exit". There is never more than one in-flight operation; every database
//! call and prompt suspends the loop until it completes.

use anyhow::Result;

use crate::db::DbAccess;
use crate::handlers;
use crate::ui::{CascadingMenu, Prompter};

/// Banner title shown above the main menu.
const APP_TITLE: &str = "Employee Tracker";

/// The loop's only states. Handlers report `Prompting` to continue;
/// `Terminated` ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Prompting,
    Terminated,
}

/// Drive the menu loop until it terminates. Recoverable failures are handled
/// inside the handlers; an error escaping here means the session itself is
/// broken (a dead terminal, usually) and the caller should exit.
pub async fn run(db: &DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let menu = CascadingMenu::new(handlers::menu_definition(), APP_TITLE);

    let mut state = LoopState::Prompting;
    while state == LoopState::Prompting {
        let selection = menu.prompt(ui)?;
        state = handlers::dispatch(db, ui, &selection).await?;
    }

    ui.show("\nGoodbye!");
    Ok(())
}

/// Run one full session and close the connection pool exactly once, on both
/// the success and the error path.
pub async fn run_session(db: DbAccess, ui: &mut dyn Prompter) -> Result<()> {
    let result = run(&db, ui).await;
    db.close().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::ScriptedPrompter;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

    /// Pool handle that never actually connects; "Exit" is resolved without
    /// touching the database.
    fn lazy_db() -> DbAccess {
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());
        DbAccess::from_pool(pool)
    }

    #[tokio::test]
    async fn exit_terminates_after_one_iteration() {
        let db = lazy_db();
        let mut ui = ScriptedPrompter::new([4]);

        run(&db, &mut ui).await.unwrap();

        assert_eq!(ui.select_calls, 1);
        assert!(ui.shown.iter().any(|line| line.contains("Goodbye")));
    }

    #[tokio::test]
    async fn session_closes_the_pool_exactly_once() {
        let pool = PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new());
        let watcher = DbAccess::from_pool(pool.clone());
        let db = DbAccess::from_pool(pool);
        let mut ui = ScriptedPrompter::new([4]);

        assert!(!watcher.is_closed());
        run_session(db, &mut ui).await.unwrap();
        assert!(watcher.is_closed());
    }

    #[tokio::test]
    async fn unrecognized_main_choice_keeps_prompting() {
        let db = lazy_db();
        let mut ui = ScriptedPrompter::new([]);
        let selection = crate::ui::Selection {
            main: "Bogus".to_string(),
            sub: String::new(),
        };

        let state = handlers::dispatch(&db, &mut ui, &selection).await.unwrap();
        assert_eq!(state, LoopState::Prompting);
    }
}
