pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::playbook::PlaybookUseCase;
use crate::application::pricing::{AirfareProvider, AwardProvider, HotelProvider};
use crate::application::recommend::RecommendUseCase;
use crate::application::result_cache::ResultCache;
use crate::application::transfer_graph::TransferGraph;
use crate::application::trip_search::TripSearchUseCase;
use crate::config::{EngineConfig, LiveSources};
use crate::domain::entities::quote::{AwardQuote, FareQuote, HotelQuote};
use crate::domain::entities::recommendation::{PlaybookContext, RecommendationBundle};
use crate::domain::entities::trip_query::{TripQuery, TripSearch};
use crate::domain::error::DomainError;
use crate::domain::ports::cache::Clock;
use crate::domain::ports::recommendation_repository::RecommendationRepository;
use crate::domain::ports::trip_search_repository::TripSearchRepository;
use crate::infrastructure::cache::{MemoryTtlCache, SystemClock};
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::recommendation_repo::SqliteRecommendationRepo;
use crate::infrastructure::sqlite::trip_search_repo::SqliteTripSearchRepo;
use rusqlite::Connection;
use std::sync::Arc;

pub struct PointsTrip {
    trip_search_uc: TripSearchUseCase,
    recommend_uc: RecommendUseCase,
    playbook_uc: PlaybookUseCase,
    graph: Arc<TransferGraph>,
}

impl PointsTrip {
    /// Configuration and live sources from the environment; estimators for
    /// every source whose credentials are missing.
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let config = EngineConfig::from_env();
        let sources = LiveSources::from_config(&config);
        Self::with_sources(db_path, config, sources, Arc::new(SystemClock))
    }

    pub fn with_sources(
        db_path: &str,
        config: EngineConfig,
        sources: LiveSources,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let search_conn = open(db_path)?;
        let options_conn = open(db_path)?;

        let trip_repo: Arc<dyn TripSearchRepository> = Arc::new(SqliteTripSearchRepo::new(search_conn));
        let options_repo: Arc<dyn RecommendationRepository> =
            Arc::new(SqliteRecommendationRepo::new(options_conn));

        let graph = Arc::new(TransferGraph::standard());

        let award = AwardProvider::new(
            sources.award,
            Arc::new(MemoryTtlCache::<AwardQuote>::new(config.award_ttl, clock.clone())),
            clock.clone(),
            graph.clone(),
            config.provider_timeout,
        );
        let airfare = AirfareProvider::new(
            sources.airfare,
            Arc::new(MemoryTtlCache::<FareQuote>::new(config.airfare_ttl, clock.clone())),
            clock.clone(),
            config.provider_timeout,
        );
        let hotel = HotelProvider::new(
            sources.hotel,
            Arc::new(MemoryTtlCache::<HotelQuote>::new(config.hotel_ttl, clock.clone())),
            clock.clone(),
            config.provider_timeout,
        );
        let results = ResultCache::new(Arc::new(MemoryTtlCache::<RecommendationBundle>::new(
            config.result_ttl,
            clock.clone(),
        )));

        Ok(Self {
            trip_search_uc: TripSearchUseCase::new(trip_repo),
            recommend_uc: RecommendUseCase::new(
                award,
                airfare,
                hotel,
                graph.clone(),
                results,
                options_repo.clone(),
                clock,
                config.max_in_flight,
            ),
            playbook_uc: PlaybookUseCase::new(options_repo),
            graph,
        })
    }

    pub fn create_trip_search(&self, query: TripQuery) -> Result<TripSearch, DomainError> {
        self.trip_search_uc.create(query)
    }

    pub fn get_trip_search(&self, id: &str) -> Result<TripSearch, DomainError> {
        self.trip_search_uc.get(id)
    }

    pub fn list_trip_searches(&self, limit: Option<usize>) -> Result<Vec<TripSearch>, DomainError> {
        self.trip_search_uc.list(limit)
    }

    /// Recommendations for a stored trip search.
    pub async fn recommend(&self, trip_search_id: &str) -> Result<RecommendationBundle, DomainError> {
        let search = self.get_trip_search(trip_search_id)?;
        self.recommend_uc.execute(&search.id, &search.query).await
    }

    /// Recommendations for an ad-hoc query; `query_id` tags the bundle.
    pub async fn recommend_query(
        &self,
        query_id: &str,
        query: &TripQuery,
    ) -> Result<RecommendationBundle, DomainError> {
        self.recommend_uc.execute(query_id, query).await
    }

    pub fn playbook_context(&self, option_id: &str) -> Result<PlaybookContext, DomainError> {
        self.playbook_uc.context(option_id)
    }

    pub fn transfer_graph(&self) -> &TransferGraph {
        &self.graph
    }
}

fn open(db_path: &str) -> Result<Connection, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    run_migrations(&conn)?;
    Ok(conn)
}
