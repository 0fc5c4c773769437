//! One-shot visibility latch.
//!
//! Reports whether the hero panel has ever intersected the viewport. The
//! latch starts closed and opens at most once; there is no way back.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::HeroError;

/// "Has the panel ever been seen" latch.
///
/// Cheap to clone; clones share the same latch.
#[derive(Clone, Debug)]
pub struct VisibilityLatch {
    tx: Arc<watch::Sender<bool>>,
    observed: bool,
}

impl VisibilityLatch {
    /// Latch fed by a working visibility observer.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            observed: true,
        }
    }

    /// Latch for a host without a visibility observer.
    ///
    /// It never opens, which leaves anything gated on it paused for good.
    pub fn unobserved() -> Self {
        warn!(
            error = %HeroError::MissingObserver,
            "No visibility observer, typewriter will stay paused"
        );
        let (tx, _) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            observed: false,
        }
    }

    /// Whether a visibility observer feeds this latch.
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Record the first intersection. Returns true only for the call that
    /// opened the latch.
    pub fn mark_intersected(&self) -> bool {
        if !self.observed {
            return false;
        }
        let opened = self.tx.send_if_modified(|seen| {
            if *seen {
                false
            } else {
                *seen = true;
                true
            }
        });
        if opened {
            debug!("Hero panel entered the viewport");
        }
        opened
    }

    pub fn has_intersected(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Resolve once the latch has opened. Never resolves for an unobserved
    /// latch.
    pub async fn wait_open(&self) {
        let mut rx = self.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|seen| *seen).await;
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let latch = VisibilityLatch::new();
        assert!(!latch.has_intersected());
    }

    #[test]
    fn opens_once_and_stays_open() {
        let latch = VisibilityLatch::new();
        assert!(latch.mark_intersected());
        assert!(latch.has_intersected());
        assert!(!latch.mark_intersected());
        assert!(latch.has_intersected());
    }

    #[test]
    fn clones_share_state() {
        let latch = VisibilityLatch::new();
        let other = latch.clone();
        other.mark_intersected();
        assert!(latch.has_intersected());
    }

    #[test]
    fn unobserved_latch_never_opens() {
        let latch = VisibilityLatch::unobserved();
        assert!(!latch.is_observed());
        assert!(!latch.mark_intersected());
        assert!(!latch.has_intersected());
    }

    #[tokio::test]
    async fn wait_open_resolves_after_mark() {
        let latch = VisibilityLatch::new();
        let waiter = {
            let latch = latch.clone();
            tokio::spawn(async move { latch.wait_open().await })
        };
        latch.mark_intersected();
        waiter.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn unobserved_wait_open_does_not_resolve() {
        let latch = VisibilityLatch::unobserved();
        let result =
            tokio::time::timeout(std::time::Duration::from_secs(60), latch.wait_open()).await;
        assert!(result.is_err());
    }
}
