pub mod match_service;
pub mod ranking_service;
pub mod search_service;
