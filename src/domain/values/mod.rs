pub mod cabin;
pub mod currency;
pub mod data_mode;
pub mod points_strategy;
pub mod seed;
pub mod valuation;
