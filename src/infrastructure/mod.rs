pub mod cache;
pub mod sqlite;
pub mod upstream;
