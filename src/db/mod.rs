//! Persistence layer split across logical submodules, one per entity. Every
//! operation issues a single parameterized statement against the shared pool
//! and wraps failures into [`DbError`] with the operation and table named, so
//! callers never have to inspect message text.

mod connection;
mod departments;
mod employees;
mod roles;

pub use connection::connect;

use sqlx::PgPool;

use crate::error::DbError;

/// The closed set of tables delete-by-id may touch. The table name reaches
/// the statement text through this enum only, never from operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Department,
    Role,
    Employee,
}

impl Entity {
    pub(crate) fn table(self) -> &'static str {
        match self {
            Entity::Department => "department",
            Entity::Role => "role",
            Entity::Employee => "employee",
        }
    }
}

/// Handle over the pooled database connection set. Constructed once at
/// startup and passed by reference to every component that needs it; the pool
/// is the only shared resource in the process.
pub struct DbAccess {
    pool: PgPool,
}

impl DbAccess {
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query so a bad configuration fails at startup
    /// instead of on the first menu action.
    pub async fn probe(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|err| DbError::from_sqlx(err, "testing the connection", "database"))?;
        Ok(())
    }

    /// Shut the pool down. Called exactly once, after the application loop
    /// has terminated.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Delete one row by identifier. Zero affected rows is surfaced as
    /// [`DbError::NotFound`] rather than silent success; a row still
    /// referenced elsewhere fails with a foreign key violation from the
    /// database, which this layer neither pre-checks nor cascades.
    pub async fn delete_by_id(&self, entity: Entity, id: i32) -> Result<(), DbError> {
        let statement = format!("DELETE FROM {} WHERE id = $1", entity.table());
        let result = sqlx::query(&statement)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| DbError::from_sqlx(err, "deleting a row", entity.table()))?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                table: entity.table(),
                id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_tables_are_the_schema_names() {
        assert_eq!(Entity::Department.table(), "department");
        assert_eq!(Entity::Role.table(), "role");
        assert_eq!(Entity::Employee.table(), "employee");
    }
}
