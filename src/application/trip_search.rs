use crate::domain::entities::trip_query::{TripQuery, TripSearch};
use crate::domain::error::DomainError;
use crate::domain::ports::trip_search_repository::TripSearchRepository;
use std::sync::Arc;

pub struct TripSearchUseCase {
    repo: Arc<dyn TripSearchRepository>,
}

impl TripSearchUseCase {
    pub fn new(repo: Arc<dyn TripSearchRepository>) -> Self {
        Self { repo }
    }

    /// Validates and stores the query; nothing is priced yet.
    pub fn create(&self, query: TripQuery) -> Result<TripSearch, DomainError> {
        query.validate()?;
        let search = TripSearch::new(query);
        self.repo.add(&search)?;
        Ok(search)
    }

    pub fn get(&self, id: &str) -> Result<TripSearch, DomainError> {
        self.repo
            .get_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trip search {id}")))
    }

    pub fn list(&self, limit: Option<usize>) -> Result<Vec<TripSearch>, DomainError> {
        self.repo.list(limit.unwrap_or(20))
    }
}
