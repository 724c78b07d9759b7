//! Delay policy applied between retry attempts.

use std::time::Duration;

use rand::Rng;

/// How long to wait before the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay after every failed attempt.
    Fixed(Duration),
    /// Doubles per attempt starting at `base`, capped at `max`, with ±20% jitter.
    Exponential { base: Duration, max: Duration },
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Fixed(Duration::from_secs(2))
    }
}

impl Backoff {
    /// Delay to sleep after the given 1-indexed failed attempt.
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        match *self {
            Backoff::Fixed(delay) => delay,
            Backoff::Exponential { base, max } => {
                let shift = (attempt.saturating_sub(1)).min(30) as u32;
                let exp = 1u64 << shift;
                let base_ms = base.as_millis().min(u64::MAX as u128) as u64;
                let capped = base_ms
                    .saturating_mul(exp)
                    .min(max.as_millis().min(u64::MAX as u128) as u64);
                let jitter = rand::thread_rng().gen_range(0.8..1.2);
                Duration::from_millis((capped as f64 * jitter) as u64)
            }
        }
    }
}
