pub mod candidate;
pub mod quote;
pub mod recommendation;
pub mod transfer;
pub mod trip_query;
