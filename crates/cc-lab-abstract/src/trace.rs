use serde::{Deserialize, Serialize};

use crate::protocol::{Condition, Protocol};

/// Per-timestep measurements for one protocol under one link condition.
///
/// The four columns are parallel: `time[i]` carries the sample instant in
/// seconds, the metric columns carry throughput in Mbps, RTT in ms and loss
/// rate in percent at that instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub protocol: Protocol,
    pub condition: Condition,
    pub time: Vec<f64>,
    pub throughput: Vec<f64>,
    pub rtt: Vec<f64>,
    pub loss: Vec<f64>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
