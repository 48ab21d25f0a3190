//! Rolling server tick-rate estimate.
//!
//! # Model
//! - Every tick-start event records the elapsed nanoseconds since the previous one.
//! - Durations land in a fixed ring of [`TICK_SAMPLE_CAPACITY`] slots, overwriting the oldest.
//! - Slots that were never written hold `0` and are left out of the average, so the estimate is
//!   usable from the first sample on.
//! - The estimate is `1e9 / mean(duration)`, clamped to [`MAX_TPS`].

use crate::constants::{MAX_TPS, NANOS_PER_SECOND, TICK_SAMPLE_CAPACITY};

/// Result of [`TickRateEstimator::estimate_rate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateEstimate {
    /// No tick duration has been observed yet.
    Calculating,
    /// Estimated ticks per second, never above [`MAX_TPS`].
    Tps(f64),
}

impl RateEstimate {
    pub fn tps(self) -> Option<f64> {
        match self {
            RateEstimate::Calculating => None,
            RateEstimate::Tps(tps) => Some(tps),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TickRateEstimator {
    samples: [u64; TICK_SAMPLE_CAPACITY],
    write_index: usize,
    last_recorded_nanos: u64,
}

impl TickRateEstimator {
    /// `start_nanos` is the reference point for the first recorded delta.
    pub fn new(start_nanos: u64) -> Self {
        Self {
            samples: [0; TICK_SAMPLE_CAPACITY],
            write_index: 0,
            last_recorded_nanos: start_nanos,
        }
    }

    /// Record a tick-start event observed at `now_nanos` on a monotonic clock.
    ///
    /// A clock that steps backwards produces a zero delta, which counts as an unset slot.
    pub fn record_tick(&mut self, now_nanos: u64) {
        let delta = now_nanos.saturating_sub(self.last_recorded_nanos);

        self.samples[self.write_index] = delta;
        self.write_index = (self.write_index + 1) % TICK_SAMPLE_CAPACITY;
        self.last_recorded_nanos = now_nanos;
    }

    pub fn estimate_rate(&self) -> RateEstimate {
        let (total, count) = self
            .samples
            .iter()
            .filter(|&&d| d > 0)
            .fold((0u128, 0u32), |(sum, n), &d| (sum + d as u128, n + 1));

        if count == 0 {
            return RateEstimate::Calculating;
        }

        let average = total as f64 / count as f64;
        RateEstimate::Tps((NANOS_PER_SECOND / average).min(MAX_TPS))
    }

    /// Raw ring contents in slot order (not insertion order).
    pub fn samples(&self) -> &[u64; TICK_SAMPLE_CAPACITY] {
        &self.samples
    }

    /// Slot the next [`record_tick`](Self::record_tick) writes to.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    pub fn valid_samples(&self) -> usize {
        self.samples.iter().filter(|&&d| d > 0).count()
    }

    pub fn last_recorded_nanos(&self) -> u64 {
        self.last_recorded_nanos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_50MS: u64 = 50_000_000;

    fn record_durations(estimator: &mut TickRateEstimator, durations: &[u64]) {
        let mut now = estimator.last_recorded_nanos();
        for &d in durations {
            now += d;
            estimator.record_tick(now);
        }
    }

    #[test]
    fn no_samples_is_calculating() {
        let estimator = TickRateEstimator::new(1_000);
        assert_eq!(estimator.estimate_rate(), RateEstimate::Calculating);
        assert_eq!(estimator.estimate_rate().tps(), None);
        assert_eq!(estimator.valid_samples(), 0);
    }

    #[test]
    fn ten_ticks_at_fifty_ms_is_twenty_tps() {
        let mut estimator = TickRateEstimator::new(0);
        record_durations(&mut estimator, &[TICK_50MS; 10]);

        let tps = estimator.estimate_rate().tps().unwrap();
        assert!((tps - 20.0).abs() < 1.0e-9);
        assert_eq!(estimator.valid_samples(), 10);
    }

    #[test]
    fn estimate_is_clamped_to_max_tps() {
        // One very short interval would read as 1000 TPS unclamped.
        let mut estimator = TickRateEstimator::new(0);
        record_durations(&mut estimator, &[1_000_000]);
        assert_eq!(estimator.estimate_rate(), RateEstimate::Tps(MAX_TPS));

        // Mixed durations, many below 50ms, still never exceed the cap.
        let mut estimator = TickRateEstimator::new(0);
        let durations: Vec<u64> = (1..=250).map(|i| (i * 7_919 % 90 + 1) * 1_000_000).collect();
        for chunk in durations.chunks(13) {
            record_durations(&mut estimator, chunk);
            let tps = estimator.estimate_rate().tps().unwrap();
            assert!(tps <= MAX_TPS);
        }
    }

    #[test]
    fn slow_ticks_average_below_cap() {
        let mut estimator = TickRateEstimator::new(0);
        // 100ms and 200ms -> mean 150ms -> 6.67 TPS.
        record_durations(&mut estimator, &[100_000_000, 200_000_000]);

        let tps = estimator.estimate_rate().tps().unwrap();
        assert!((tps - 1.0e9 / 150_000_000.0).abs() < 1.0e-9);
    }

    #[test]
    fn hundred_and_first_sample_overwrites_the_first() {
        let mut estimator = TickRateEstimator::new(0);
        let durations: Vec<u64> = (1..=TICK_SAMPLE_CAPACITY as u64).collect();
        record_durations(&mut estimator, &durations);

        assert_eq!(estimator.write_index(), 0);
        assert_eq!(estimator.samples()[0], 1);
        assert_eq!(estimator.valid_samples(), TICK_SAMPLE_CAPACITY);

        record_durations(&mut estimator, &[5_000]);

        assert_eq!(estimator.samples()[0], 5_000);
        assert_eq!(estimator.samples()[1], 2);
        assert_eq!(estimator.samples()[TICK_SAMPLE_CAPACITY - 1], 100);
        assert_eq!(estimator.write_index(), 1);
        assert_eq!(estimator.valid_samples(), TICK_SAMPLE_CAPACITY);
    }

    #[test]
    fn backwards_clock_counts_as_unset() {
        let mut estimator = TickRateEstimator::new(1_000_000_000);
        estimator.record_tick(500);

        assert_eq!(estimator.samples()[0], 0);
        assert_eq!(estimator.estimate_rate(), RateEstimate::Calculating);
        assert_eq!(estimator.last_recorded_nanos(), 500);
    }
}
