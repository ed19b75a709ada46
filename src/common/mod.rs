//! Shared numeric helpers used by the indicator implementations

pub mod math;
