//! Structured error taxonomy for the persistence layer. Handlers branch on
//! these variants to pick a user-facing explanation, so the classification
//! happens exactly once, here, instead of being re-derived from message text
//! at every call site.

use thiserror::Error;

/// PostgreSQL SQLSTATE for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for a not-null violation.
const NOT_NULL_VIOLATION: &str = "23502";

/// Errors surfaced by [`crate::db::DbAccess`]. Every variant names the
/// operation (and where meaningful, the table) that failed so the message is
/// self-describing even before a handler translates it.
#[derive(Debug, Error)]
pub enum DbError {
    /// The pool could not produce a working connection.
    #[error("database connection failed while {operation}")]
    Connection {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A write was rejected because it would break a foreign key.
    #[error("error {operation} in '{table}': foreign key constraint violated")]
    ForeignKey {
        operation: &'static str,
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A write was rejected because a required column had no value.
    #[error("error {operation} in '{table}': a required value was missing")]
    NotNull {
        operation: &'static str,
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// An update or delete matched zero rows.
    #[error("no row in '{table}' matched id {id}")]
    NotFound { table: &'static str, id: i32 },

    /// Any other database failure, reported with its original message.
    #[error("error {operation} in '{table}': {source}")]
    Query {
        operation: &'static str,
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Coarse classification used while converting from [`sqlx::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    ForeignKey,
    NotNull,
    Connection,
    Other,
}

/// Map a SQLSTATE code onto our taxonomy. Kept as a free function over the
/// raw code string so it can be tested without constructing driver errors.
fn classify_sqlstate(code: Option<&str>) -> Classification {
    match code {
        Some(FOREIGN_KEY_VIOLATION) => Classification::ForeignKey,
        Some(NOT_NULL_VIOLATION) => Classification::NotNull,
        _ => Classification::Other,
    }
}

impl DbError {
    /// Wrap a driver error, attaching the operation and table for context.
    /// Constraint violations are recognized by SQLSTATE; pool and transport
    /// failures become [`DbError::Connection`]; the rest stay generic.
    pub fn from_sqlx(source: sqlx::Error, operation: &'static str, table: &'static str) -> Self {
        let classification = match &source {
            sqlx::Error::Database(db) => classify_sqlstate(db.code().as_deref()),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Classification::Connection,
            _ => Classification::Other,
        };

        match classification {
            Classification::ForeignKey => DbError::ForeignKey {
                operation,
                table,
                source,
            },
            Classification::NotNull => DbError::NotNull {
                operation,
                table,
                source,
            },
            Classification::Connection => DbError::Connection { operation, source },
            Classification::Other => DbError::Query {
                operation,
                table,
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_key_sqlstate_is_recognized() {
        assert_eq!(classify_sqlstate(Some("23503")), Classification::ForeignKey);
    }

    #[test]
    fn not_null_sqlstate_is_recognized() {
        assert_eq!(classify_sqlstate(Some("23502")), Classification::NotNull);
    }

    #[test]
    fn other_sqlstates_stay_generic() {
        assert_eq!(classify_sqlstate(Some("42601")), Classification::Other);
        assert_eq!(classify_sqlstate(Some("23505")), Classification::Other);
        assert_eq!(classify_sqlstate(None), Classification::Other);
    }

    #[test]
    fn pool_failures_classify_as_connection() {
        let err = DbError::from_sqlx(sqlx::Error::PoolTimedOut, "probing", "department");
        assert!(matches!(err, DbError::Connection { .. }));
    }

    #[test]
    fn row_not_found_stays_a_query_error() {
        let err = DbError::from_sqlx(sqlx::Error::RowNotFound, "listing roles", "role");
        assert!(matches!(err, DbError::Query { .. }));
    }
}
