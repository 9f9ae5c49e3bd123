use crate::domain::entities::recommendation::{RecommendationBundle, RecommendationOption};
use crate::domain::error::DomainError;
use crate::domain::ports::recommendation_repository::RecommendationRepository;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

/// Options are stored whole as JSON, with the fields worth filtering on
/// pulled out into columns.
pub struct SqliteRecommendationRepo {
    conn: Mutex<Connection>,
}

impl SqliteRecommendationRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl RecommendationRepository for SqliteRecommendationRepo {
    fn save_bundle(&self, bundle: &RecommendationBundle) -> Result<(), DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction()?;
        for (rank, option) in bundle.options.iter().enumerate() {
            tx.execute(
                "INSERT OR REPLACE INTO recommendation_options
                 (id, query_id, rank, destination, origin, points_strategy, score, payload, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    option.id,
                    bundle.query_id,
                    rank as i64,
                    option.destination,
                    option.origin,
                    option.points_strategy.to_string(),
                    option.score_final,
                    serde_json::to_string(option)?,
                    bundle.generated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to save option: {e}")))?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_option(&self, option_id: &str) -> Result<Option<RecommendationOption>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM recommendation_options WHERE id = ?1",
                params![option_id],
                |row| row.get(0),
            )
            .optional()?;
        payload
            .map(|p| serde_json::from_str(&p).map_err(DomainError::from))
            .transpose()
    }
}
