//! External collaborators and the outbound scoring integration

pub mod market_data;
pub mod payload;
pub mod pipeline;
pub mod scoring;

pub use market_data::{InMemoryOhlcvSource, OhlcvSource};
pub use payload::serialize_payload;
pub use pipeline::{EvaluationSink, RecordingSink};
pub use scoring::{clamp_score, extract_score, ScoringClient};
