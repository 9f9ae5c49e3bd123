use crate::domain::entities::trip_query::{TripQuery, TripSearch};
use crate::domain::error::DomainError;
use crate::domain::ports::trip_search_repository::TripSearchRepository;
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;
use tracing::warn;

pub struct SqliteTripSearchRepo {
    conn: Mutex<Connection>,
}

impl SqliteTripSearchRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_search(row: &rusqlite::Row) -> Result<(String, String, String), rusqlite::Error> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    }

    fn decode((id, query_json, created_str): (String, String, String)) -> Result<TripSearch, DomainError> {
        let query: TripQuery = serde_json::from_str(&query_json)?;
        let created_at = DateTime::parse_from_rfc3339(&created_str)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .unwrap_or_else(|_| {
                warn!(%id, created_at = %created_str, "invalid timestamp on trip search");
                chrono::Utc::now()
            });
        Ok(TripSearch { id, query, created_at })
    }
}

impl TripSearchRepository for SqliteTripSearchRepo {
    fn add(&self, search: &TripSearch) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO trip_searches (id, query, label, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                search.id,
                serde_json::to_string(&search.query)?,
                search.query.label,
                search.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add trip search: {e}")))?;
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<TripSearch>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let row = conn
            .query_row(
                "SELECT id, query, created_at FROM trip_searches WHERE id = ?1",
                params![id],
                Self::row_to_search,
            )
            .optional()?;
        row.map(Self::decode).transpose()
    }

    fn list(&self, limit: usize) -> Result<Vec<TripSearch>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn.prepare(
            "SELECT id, query, created_at FROM trip_searches ORDER BY created_at DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], Self::row_to_search)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(Self::decode).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::migrations::run_migrations;

    fn repo() -> SqliteTripSearchRepo {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        SqliteTripSearchRepo::new(conn)
    }

    fn search(label: &str) -> TripSearch {
        let query: TripQuery = serde_json::from_value(serde_json::json!({
            "origins": ["IAD"],
            "date_window_start": "2026-05-01",
            "date_window_end": "2026-05-09",
            "vibe_tags": ["europe"],
            "balances": {"CHASE": 80000},
            "label": label,
        }))
        .unwrap();
        TripSearch::new(query)
    }

    #[test]
    fn test_add_and_get() {
        let repo = repo();
        let s = search("Paris in May");
        repo.add(&s).unwrap();

        let loaded = repo.get_by_id(&s.id).unwrap().unwrap();
        assert_eq!(loaded.query, s.query);
        assert_eq!(loaded.query.label.as_deref(), Some("Paris in May"));
        assert!(repo.get_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_respects_limit() {
        let repo = repo();
        for i in 0..3 {
            repo.add(&search(&format!("trip {i}"))).unwrap();
        }
        assert_eq!(repo.list(2).unwrap().len(), 2);
        assert_eq!(repo.list(10).unwrap().len(), 3);
    }
}
