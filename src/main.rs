//! Binary entry point: read the `DB_*` settings, open and verify the
//! connection pool, then hand control to the menu loop. Everything runs on a
//! single-threaded runtime; there is never more than one in-flight operation.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use employee_tracker::ui::TerminalPrompter;
use employee_tracker::{config, db, run_session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Default to warn so log lines never interleave with the prompts; RUST_LOG
    // overrides for debugging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = config::load()?;
    let db = db::connect(&config)
        .await
        .context("could not reach the employee database; check the DB_* settings")?;
    let mut ui = TerminalPrompter::new()?;

    if let Err(err) = run_session(db, &mut ui).await {
        tracing::error!("session ended unexpectedly: {err:#}");
        return Err(err);
    }
    Ok(())
}
