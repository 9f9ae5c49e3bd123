use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS trip_searches (
            id TEXT PRIMARY KEY,
            query TEXT NOT NULL,
            label TEXT,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS recommendation_options (
            id TEXT PRIMARY KEY,
            query_id TEXT NOT NULL,
            rank INTEGER NOT NULL,
            destination TEXT NOT NULL,
            origin TEXT NOT NULL,
            points_strategy TEXT NOT NULL,
            score REAL NOT NULL,
            payload TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trip_searches_created ON trip_searches(created_at);
        CREATE INDEX IF NOT EXISTS idx_options_query ON recommendation_options(query_id);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
