//! Search configuration

use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

/// Default bound on how long the index build may take
pub const DEFAULT_BUILD_TIMEOUT: Duration = Duration::from_secs(5);

/// Tuning knobs for a ladder search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderConfig {
    /// Number of index workers (and dictionary chunks)
    pub parallelism: NonZeroUsize,
    /// How long to wait for every index worker before giving up
    pub build_timeout: Duration,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(parallelism: NonZeroUsize, build_timeout: Duration) -> Self {
        Self {
            parallelism,
            build_timeout,
        }
    }

    #[must_use]
    pub const fn with_parallelism(mut self, parallelism: NonZeroUsize) -> Self {
        self.parallelism = parallelism;
        self
    }

    #[must_use]
    pub const fn with_build_timeout(mut self, build_timeout: Duration) -> Self {
        self.build_timeout = build_timeout;
        self
    }
}

impl Default for LadderConfig {
    /// One worker per available processing unit, five second build bound
    fn default() -> Self {
        Self::new(
            thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            DEFAULT_BUILD_TIMEOUT,
        )
    }
}
