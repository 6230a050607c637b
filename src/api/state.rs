use std::sync::Arc;

use crate::db::QueryExecutor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn QueryExecutor>,
}

impl AppState {
    /// Creates state around the executor every handler queries through
    pub fn new<E>(db: E) -> Self
    where
        E: QueryExecutor + 'static,
    {
        Self { db: Arc::new(db) }
    }
}
