pub mod competitor;
pub mod dataset;
pub mod fixture;
pub mod forecast;
pub mod samples;
pub mod strategy;
