pub mod cache;
pub mod pricing;
pub mod recommendation_repository;
pub mod trip_search_repository;
