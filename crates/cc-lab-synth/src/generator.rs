use cc_lab_abstract::{Condition, Protocol, Trace};
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

/// Sampling interval in seconds.
pub const SAMPLE_STEP: f64 = 0.1;
/// Samples per trace, covering the half-open interval [0, 60) seconds.
pub const SAMPLE_COUNT: usize = 600;
/// Pair seeds are reduced modulo this constant.
pub const SEED_SPACE: u64 = 10_000;

/// Synthesis constants for one protocol under one link condition.
///
/// Throughput follows `base + amplitude * sin(t / period)` plus Gaussian
/// jitter, RTT its baseline plus jitter. Loss follows a rectified sinusoid
/// around `loss_base` and is reported in percent. The literals in
/// [`profile`] are tuned so the traces reproduce the headline measurements
/// of the fixed comparison tables.
#[derive(Debug, Clone, Copy)]
pub struct TraceProfile {
    pub base_throughput: f64,
    pub amplitude: f64,
    pub period: f64,
    pub throughput_jitter: f64,
    pub base_rtt: f64,
    pub rtt_jitter: f64,
    pub loss_base: f64,
    pub loss_amplitude: f64,
    pub loss_jitter: f64,
}

/// Synthesis constants for the given pair.
pub fn profile(condition: Condition, protocol: Protocol) -> TraceProfile {
    let mut profile = match protocol {
        Protocol::Cubic => TraceProfile {
            base_throughput: 8.5,
            amplitude: 2.0,
            period: 5.0,
            throughput_jitter: 0.9,
            base_rtt: 80.0,
            rtt_jitter: 12.0,
            loss_base: 0.012,
            loss_amplitude: 0.006,
            loss_jitter: 0.003,
        },
        Protocol::Bbr => TraceProfile {
            base_throughput: 9.2,
            amplitude: 1.2,
            period: 4.0,
            throughput_jitter: 0.5,
            base_rtt: 100.0,
            rtt_jitter: 6.0,
            loss_base: 0.004,
            loss_amplitude: 0.002,
            loss_jitter: 0.001,
        },
        Protocol::Sprout => TraceProfile {
            base_throughput: 6.0,
            amplitude: 1.5,
            period: 6.0,
            throughput_jitter: 1.1,
            base_rtt: 120.0,
            rtt_jitter: 15.0,
            loss_base: 0.025,
            loss_amplitude: 0.010,
            loss_jitter: 0.004,
        },
    };
    if condition == Condition::LowBandwidth {
        let (base_throughput, base_rtt) = match protocol {
            Protocol::Cubic => (3.5, 140.0),
            Protocol::Bbr => (4.1, 160.0),
            Protocol::Sprout => (2.5, 190.0),
        };
        profile.base_throughput = base_throughput;
        profile.base_rtt = base_rtt;
    }
    profile
}

/// Seed for one pair: a stable hash of `"{condition}_{protocol}"`.
fn pair_seed(condition: Condition, protocol: Protocol) -> u64 {
    let digest = blake3::hash(format!("{condition}_{protocol}").as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes) % SEED_SPACE
}

/// Builds the synthetic trace for one protocol/condition pair.
///
/// The RNG is seeded per call from a stable hash of the pair, so repeated
/// calls are bit-identical regardless of call order or thread. All metric
/// columns are clamped to zero from below; loss is scaled to percent.
pub fn generate(condition: Condition, protocol: Protocol) -> Trace {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(pair_seed(condition, protocol));
    let profile = profile(condition, protocol);

    let mut time = Vec::with_capacity(SAMPLE_COUNT);
    let mut throughput = Vec::with_capacity(SAMPLE_COUNT);
    let mut rtt = Vec::with_capacity(SAMPLE_COUNT);
    let mut loss = Vec::with_capacity(SAMPLE_COUNT);

    for step in 0..SAMPLE_COUNT {
        let t = step as f64 * SAMPLE_STEP;
        // One draw per metric per step, in column order.
        let throughput_noise: f64 = StandardNormal.sample(&mut rng);
        let rtt_noise: f64 = StandardNormal.sample(&mut rng);
        let loss_noise: f64 = StandardNormal.sample(&mut rng);

        let mbps = profile.base_throughput
            + profile.amplitude * (t / profile.period).sin()
            + profile.throughput_jitter * throughput_noise;
        let ms = profile.base_rtt + profile.rtt_jitter * rtt_noise;
        let loss_fraction = profile.loss_base
            + profile.loss_amplitude * (t / profile.period).sin().abs()
            + profile.loss_jitter * loss_noise;

        time.push(t);
        throughput.push(mbps.max(0.0));
        rtt.push(ms.max(0.0));
        loss.push((loss_fraction * 100.0).max(0.0));
    }

    debug!(
        "Generated {} samples for {}_{}",
        SAMPLE_COUNT, condition, protocol
    );

    Trace {
        protocol,
        condition,
        time,
        throughput,
        rtt,
        loss,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate, pair_seed, SAMPLE_COUNT, SEED_SPACE};
    use cc_lab_abstract::{Condition, Protocol};

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn traces_are_bit_identical_across_calls() {
        for condition in Condition::ALL {
            for protocol in Protocol::ALL {
                assert_eq!(generate(condition, protocol), generate(condition, protocol));
            }
        }
    }

    #[test]
    fn generation_order_does_not_matter() {
        let forward: Vec<_> = Protocol::ALL
            .iter()
            .map(|&protocol| generate(Condition::HighBandwidth, protocol))
            .collect();

        let mut handles = Vec::new();
        for &protocol in Protocol::ALL.iter().rev() {
            handles.push(std::thread::spawn(move || {
                (protocol, generate(Condition::HighBandwidth, protocol))
            }));
        }
        for handle in handles {
            let (protocol, trace) = handle.join().expect("generator thread should not panic");
            let reference = forward
                .iter()
                .find(|t| t.protocol == protocol)
                .expect("every protocol is generated up front");
            assert_eq!(&trace, reference);
        }
    }

    #[test]
    fn columns_are_parallel_and_time_strictly_increases() {
        let trace = generate(Condition::HighBandwidth, Protocol::Cubic);
        assert_eq!(trace.len(), SAMPLE_COUNT);
        assert_eq!(trace.throughput.len(), SAMPLE_COUNT);
        assert_eq!(trace.rtt.len(), SAMPLE_COUNT);
        assert_eq!(trace.loss.len(), SAMPLE_COUNT);
        assert_eq!(trace.time[0], 0.0);
        assert!(trace.time.windows(2).all(|w| w[0] < w[1]));
        assert!(trace.time.last().is_some_and(|&t| t < 60.0));
    }

    #[test]
    fn metrics_are_never_negative() {
        for condition in Condition::ALL {
            for protocol in Protocol::ALL {
                let trace = generate(condition, protocol);
                assert!(trace.throughput.iter().all(|&v| v >= 0.0));
                assert!(trace.rtt.iter().all(|&v| v >= 0.0));
                assert!(trace.loss.iter().all(|&v| v >= 0.0));
            }
        }
    }

    #[test]
    fn condition_shifts_the_baselines() {
        for protocol in Protocol::ALL {
            let high = generate(Condition::HighBandwidth, protocol);
            let low = generate(Condition::LowBandwidth, protocol);
            assert!(mean(&high.throughput) > mean(&low.throughput));
            assert!(mean(&low.rtt) > mean(&high.rtt));
        }
    }

    #[test]
    fn bbr_outpaces_sprout_under_high_bandwidth() {
        let bbr = generate(Condition::HighBandwidth, Protocol::Bbr);
        let sprout = generate(Condition::HighBandwidth, Protocol::Sprout);
        assert!(mean(&bbr.throughput) > mean(&sprout.throughput));
        assert!(mean(&sprout.loss) > mean(&bbr.loss));
    }

    #[test]
    fn pair_seeds_stay_in_the_reduced_space() {
        for condition in Condition::ALL {
            for protocol in Protocol::ALL {
                assert!(pair_seed(condition, protocol) < SEED_SPACE);
            }
        }
    }
}
