pub mod postgres;
pub mod row;

pub use postgres::{create_pool, PgExecutor};
pub use row::Row;

/// Errors raised while talking to the database
///
/// Every variant carries the driver's message. Callers never branch on the
/// variant; it only sharpens the server-side log line.
#[derive(thiserror::Error, Debug)]
pub enum DatabaseError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("could not decode column `{column}`: {message}")]
    Decode { column: String, message: String },
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => DatabaseError::Connect(err.to_string()),
            _ => DatabaseError::Query(err.to_string()),
        }
    }
}

/// Positional bind parameter for a query
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Executes SQL and hands back rows as JSON objects
///
/// Implementations must be safe to share across concurrent requests; each
/// call may run on a different underlying connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run `sql` with positional `params` and return every row in order
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>, DatabaseError>;
}
