//! Core application primitives (orchestration)

pub mod evaluator;

pub use evaluator::RequestEvaluator;
