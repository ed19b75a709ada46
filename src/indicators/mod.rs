pub mod computer;
pub mod library;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use computer::{IndicatorComputer, IndicatorParams};
pub use library::{IndicatorLibrary, StandardIndicators};
