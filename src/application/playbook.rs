use crate::domain::entities::recommendation::PlaybookContext;
use crate::domain::error::DomainError;
use crate::domain::ports::recommendation_repository::RecommendationRepository;
use std::sync::Arc;

/// Looks up what the playbook generator needs for an emitted option.
pub struct PlaybookUseCase {
    repo: Arc<dyn RecommendationRepository>,
}

impl PlaybookUseCase {
    pub fn new(repo: Arc<dyn RecommendationRepository>) -> Self {
        Self { repo }
    }

    /// `MissingContext` when no earlier run produced `option_id`.
    pub fn context(&self, option_id: &str) -> Result<PlaybookContext, DomainError> {
        let option = self
            .repo
            .get_option(option_id)?
            .ok_or_else(|| DomainError::MissingContext(option_id.to_string()))?;
        Ok(PlaybookContext::from(&option))
    }
}
