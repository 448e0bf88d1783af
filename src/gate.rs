//! Concurrency release boundary around kernel loops
//!
//! The embedding host is assumed to serialize user-level execution behind a
//! single coarse-grained claim (the "runtime lock"). A kernel loop that
//! touches only raw buffer memory and captured scalars may release that
//! claim for its duration, letting the host run other waiting work
//! concurrently with the numeric loop.
//!
//! The protocol is mandatory around every kernel loop: release immediately
//! before the first iteration, reacquire immediately after the last, and
//! reacquire on *every* exit path. It is therefore modelled as a scoped
//! guard rather than a free-standing pair of calls that could be
//! mismatched: [`BlockingSection::enter`] releases, and `Drop` reacquires,
//! including during unwinding if an operation slot panics.
//!
//! While a section is open, the executing code must not allocate
//! host-managed objects, trigger host callbacks, or touch any state not
//! already captured into buffer views and scalars. The kernels uphold this
//! by construction; injected operation slots must uphold it themselves.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The host's coarse-grained exclusive execution claim
///
/// Implementations bridge to whatever lock the embedding host uses. Both
/// methods are called exactly once per kernel invocation, from the calling
/// thread, in release/reacquire order.
pub trait RuntimeGate: Send + Sync {
    /// Release the claim; other host work may now run.
    fn release(&self);

    /// Reacquire the claim; blocks until the claim is held again.
    fn reacquire(&self);
}

/// No-op gate for embeddings without a runtime lock
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGate;

impl RuntimeGate for NoGate {
    fn release(&self) {}
    fn reacquire(&self) {}
}

/// Scoped marker for "native-only execution"
///
/// Releases the gate on construction and reacquires it when dropped.
pub struct BlockingSection<'g, G: RuntimeGate + ?Sized> {
    gate: &'g G,
}

impl<'g, G: RuntimeGate + ?Sized> BlockingSection<'g, G> {
    /// Release the claim and enter the section
    #[inline]
    pub fn enter(gate: &'g G) -> Self {
        gate.release();
        Self { gate }
    }
}

impl<G: RuntimeGate + ?Sized> Drop for BlockingSection<'_, G> {
    #[inline]
    fn drop(&mut self) {
        self.gate.reacquire();
    }
}

/// Gate test double that counts release/reacquire transitions
///
/// Used by the test suite to verify that every kernel opens exactly one
/// balanced section per call, including when the operation slot panics.
#[derive(Debug, Default)]
pub struct CountingGate {
    released: AtomicUsize,
    reacquired: AtomicUsize,
}

impl CountingGate {
    /// Create a gate with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the claim was released
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Number of times the claim was reacquired
    pub fn reacquired(&self) -> usize {
        self.reacquired.load(Ordering::SeqCst)
    }

    /// True when every release has been matched by a reacquire
    pub fn is_balanced(&self) -> bool {
        self.released() == self.reacquired()
    }
}

impl RuntimeGate for CountingGate {
    fn release(&self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }

    fn reacquire(&self) {
        self.reacquired.fetch_add(1, Ordering::SeqCst);
    }
}
