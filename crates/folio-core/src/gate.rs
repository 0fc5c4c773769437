//! Pause gating.
//!
//! Collapses every reason to pause the typewriter (panel not yet seen,
//! contact overlay open) into one boolean. The engine only ever sees that
//! boolean, so adding a new reason to pause never touches the engine.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use crate::visibility::VisibilityLatch;

/// The raw signals behind the derived pause flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PauseInputs {
    /// Visibility latch has opened
    pub visible: bool,
    /// Contact overlay is open
    pub overlay_open: bool,
}

impl PauseInputs {
    pub fn is_paused(&self) -> bool {
        !self.visible || self.overlay_open
    }
}

struct GateInner {
    latch: VisibilityLatch,
    overlay_open: Mutex<bool>,
    paused_tx: watch::Sender<bool>,
}

/// Producer side of the engine's pause signal.
///
/// Cheap to clone; clones share the same gate. Subscribers are only woken
/// when the derived flag actually flips.
#[derive(Clone)]
pub struct PauseGate {
    inner: Arc<GateInner>,
}

impl PauseGate {
    pub fn new(latch: VisibilityLatch) -> Self {
        let initial = PauseInputs {
            visible: latch.has_intersected(),
            overlay_open: false,
        };
        let (paused_tx, _) = watch::channel(initial.is_paused());
        Self {
            inner: Arc::new(GateInner {
                latch,
                overlay_open: Mutex::new(false),
                paused_tx,
            }),
        }
    }

    pub fn latch(&self) -> &VisibilityLatch {
        &self.inner.latch
    }

    /// The panel has intersected the viewport.
    pub fn mark_visible(&self) {
        let overlay_open = self.inner.overlay_open.lock();
        self.inner.latch.mark_intersected();
        self.refresh(*overlay_open);
    }

    pub fn set_overlay_open(&self, open: bool) {
        let mut overlay_open = self.inner.overlay_open.lock();
        *overlay_open = open;
        self.refresh(open);
    }

    pub fn inputs(&self) -> PauseInputs {
        PauseInputs {
            visible: self.inner.latch.has_intersected(),
            overlay_open: *self.inner.overlay_open.lock(),
        }
    }

    pub fn is_paused(&self) -> bool {
        *self.inner.paused_tx.borrow()
    }

    /// Receiver for the derived pause flag, suitable for
    /// [`TypewriterEngine::spawn`](crate::TypewriterEngine::spawn).
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.paused_tx.subscribe()
    }

    /// Mark the gate visible once the latch opens, however it gets opened.
    pub fn follow_latch(&self) -> tokio::task::JoinHandle<()> {
        let gate = self.clone();
        tokio::spawn(async move {
            gate.inner.latch.wait_open().await;
            gate.mark_visible();
        })
    }

    // Called with the overlay lock held so concurrent updates publish in order.
    fn refresh(&self, overlay_open: bool) {
        let inputs = PauseInputs {
            visible: self.inner.latch.has_intersected(),
            overlay_open,
        };
        let paused = inputs.is_paused();
        self.inner.paused_tx.send_if_modified(|current| {
            if *current == paused {
                false
            } else {
                debug!(?inputs, paused, "Pause signal changed");
                *current = paused;
                true
            }
        });
    }
}
