use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Congestion-control schemes covered by the comparison report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Cubic,
    Bbr,
    Sprout,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Cubic, Protocol::Bbr, Protocol::Sprout];

    /// Lowercase identifier used in seed strings and file names.
    pub fn key(&self) -> &'static str {
        match self {
            Protocol::Cubic => "cubic",
            Protocol::Bbr => "bbr",
            Protocol::Sprout => "sprout",
        }
    }

    /// Name shown in chart titles and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Cubic => "CUBIC",
            Protocol::Bbr => "BBR",
            Protocol::Sprout => "Sprout",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Protocol {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cubic" => Ok(Protocol::Cubic),
            "bbr" => Ok(Protocol::Bbr),
            "sprout" => Ok(Protocol::Sprout),
            other => Err(TraceError::InvalidArgument {
                kind: "protocol",
                value: other.to_string(),
            }),
        }
    }
}

/// Emulated link regime a trace was collected under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    HighBandwidth,
    LowBandwidth,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::HighBandwidth, Condition::LowBandwidth];

    /// Lowercase identifier used in seed strings and file names.
    pub fn key(&self) -> &'static str {
        match self {
            Condition::HighBandwidth => "high-bandwidth",
            Condition::LowBandwidth => "low-bandwidth",
        }
    }

    /// Name shown in chart titles and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::HighBandwidth => "High Bandwidth",
            Condition::LowBandwidth => "Low Bandwidth",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Condition {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high-bandwidth" => Ok(Condition::HighBandwidth),
            "low-bandwidth" => Ok(Condition::LowBandwidth),
            other => Err(TraceError::InvalidArgument {
                kind: "condition",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Condition, Protocol};
    use crate::error::TraceError;

    #[test]
    fn keys_round_trip_through_from_str() {
        for protocol in Protocol::ALL {
            assert_eq!(protocol.key().parse::<Protocol>().ok(), Some(protocol));
        }
        for condition in Condition::ALL {
            assert_eq!(condition.key().parse::<Condition>().ok(), Some(condition));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            "reno".parse::<Protocol>(),
            Err(TraceError::InvalidArgument {
                kind: "protocol",
                ..
            })
        ));
        assert!(matches!(
            "lossy".parse::<Condition>(),
            Err(TraceError::InvalidArgument {
                kind: "condition",
                ..
            })
        ));
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(Protocol::Cubic.to_string(), "cubic");
        assert_eq!(Condition::HighBandwidth.to_string(), "high-bandwidth");
    }
}
