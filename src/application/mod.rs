pub mod accuracy;
pub mod evaluation;
pub mod import;
pub mod picks;
pub mod ranking;
pub mod scoring;
pub mod strategy;
