pub mod evaluator;
pub mod scorable;
