pub mod error;
pub mod protocol;
pub mod trace;

pub use error::TraceError;
pub use protocol::{Condition, Protocol};
pub use trace::Trace;
