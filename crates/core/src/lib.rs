#![forbid(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod insight;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod time;

pub use aggregate::{AggregateError, CategoryResult, OptionShare, ResultAggregator, SurveyReport};
pub use error::ConfigError;
pub use insight::{Insight, insight_for};
pub use session::{SessionError, SurveyPhase, SurveySession};
pub use shuffle::ShuffleSeed;
pub use time::Clock;
