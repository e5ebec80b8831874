//! Debounce Module
//!
//! Collapses bursts of filter changes into one refetch. Every call restarts
//! the timer; only the latest call survives the delay.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// == Debouncer ==
/// Generation-counted debouncer.
///
/// Each [`Debouncer::call`] supersedes all earlier ones. The returned future
/// sleeps for the configured delay and resolves `true` only if no newer call
/// arrived in the meantime, in which case the caller performs its refetch.
///
/// Clones share the generation counter, so a cloned handle debounces against
/// the original.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Creates a debouncer with the given settle delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    // == Call ==
    /// Registers a change and returns a future that resolves once the burst
    /// has settled: `true` if this call is still the latest, `false` if it
    /// was superseded.
    pub fn call(&self) -> impl std::future::Future<Output = bool> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;

        async move {
            tokio::time::sleep(delay).await;
            generation.load(Ordering::SeqCst) == my_generation
        }
    }
}
