use crate::domain::entities::recommendation::{RecommendationBundle, RecommendationOption};
use crate::domain::error::DomainError;

/// Keeps every emitted option addressable by id, so downstream requests
/// (playbooks) can refer back to an earlier pipeline run.
pub trait RecommendationRepository: Send + Sync {
    fn save_bundle(&self, bundle: &RecommendationBundle) -> Result<(), DomainError>;
    fn get_option(&self, option_id: &str) -> Result<Option<RecommendationOption>, DomainError>;
}
