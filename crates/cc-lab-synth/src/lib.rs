pub mod generator;
pub mod stats;

pub use generator::{generate, TraceProfile};
pub use stats::{summarize, ProtocolPerformance, RttSummary, TraceSummary};
