use thiserror::Error;

/// Shared error type for trace generation and aggregation.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Protocol or condition name outside the supported set.
    #[error("unknown {kind}: {value:?}")]
    InvalidArgument { kind: &'static str, value: String },
    /// Aggregation requested over a zero-length series.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

#[cfg(test)]
mod tests {
    use super::TraceError;

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            TraceError::InvalidArgument {
                kind: "protocol",
                value: "reno".to_string(),
            }
            .to_string(),
            "unknown protocol: \"reno\""
        );
        assert_eq!(
            TraceError::EmptyInput("trace").to_string(),
            "empty input: trace"
        );
    }
}
