use crate::domain::entities::trip_query::TripSearch;
use crate::domain::error::DomainError;

pub trait TripSearchRepository: Send + Sync {
    fn add(&self, search: &TripSearch) -> Result<(), DomainError>;
    fn get_by_id(&self, id: &str) -> Result<Option<TripSearch>, DomainError>;
    fn list(&self, limit: usize) -> Result<Vec<TripSearch>, DomainError>;
}
