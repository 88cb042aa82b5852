//! Cosmetic "typing" pause shown before a reply.
//!
//! Purely presentational: the responder never waits. Front ends that want
//! the effect sample a delay and sleep before printing.

use std::time::Duration;

use rand::Rng;

use crate::error::ValidationError;

pub const DEFAULT_MIN_MS: u64 = 1500;
pub const DEFAULT_MAX_MS: u64 = 2500;

/// Uniform delay range in milliseconds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    min_ms: u64,
    max_ms: u64,
}

impl TypingDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, ValidationError> {
        if min_ms > max_ms {
            return Err(ValidationError::invalid(
                "typing delay",
                format!("minimum {min_ms}ms exceeds maximum {max_ms}ms"),
            ));
        }
        Ok(Self { min_ms, max_ms })
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::thread_rng())
    }

    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_MIN_MS,
            max_ms: DEFAULT_MAX_MS,
        }
    }
}
