pub mod candidates;
pub mod playbook;
pub mod pricing;
pub mod recommend;
pub mod result_cache;
pub mod scoring;
pub mod transfer_graph;
pub mod trip_search;
pub mod valuation;
