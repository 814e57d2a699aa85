pub mod match_analysis;
pub mod resume;
pub mod vacancy;
