pub mod migrations;
pub mod recommendation_repo;
pub mod trip_search_repo;
