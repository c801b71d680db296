use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tag handed to one acquisition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Monotonic sequence shared by every writer of the configuration slot.
///
/// A writer takes a [`Generation`] before it suspends and may only commit
/// while that generation is still the latest one; starting a newer attempt,
/// editing the document or tearing the owner down all advance the sequence.
#[derive(Debug, Clone, Default)]
pub struct GenerationGuard {
    current: Arc<AtomicU64>,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.load(Ordering::SeqCst) == generation.0
    }

    /// Makes every outstanding generation stale.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}
