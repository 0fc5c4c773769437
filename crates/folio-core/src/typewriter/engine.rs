//! Async driver for the typewriter.
//!
//! The engine runs on its own tokio task and is the only writer of its
//! [`Typewriter`]. Each loop iteration arms one delay for the pending step
//! and races it against the pause signal:
//!
//! - delay elapses first: the step is applied and a snapshot published
//! - pause signal changes first: the delay future is dropped (cancelled) and
//!   the loop re-reads the signal before arming anything new
//!
//! The hold after a fully typed phrase is an ordinary step, so a pause or
//! teardown during the hold cancels it like any other delay.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::phrases::PhraseList;
use crate::error::HeroResult;
use super::state::{Typewriter, TypewriterSnapshot};
use super::timing::TypewriterTiming;

/// Spawns typewriter tasks.
pub struct TypewriterEngine;

impl TypewriterEngine {
    /// Start a typewriter over `phrases`, gated by `paused`.
    ///
    /// Must be called from within a tokio runtime. Fails with
    /// `InvalidConfiguration` if any delay in `timing` is zero.
    pub fn spawn(
        phrases: PhraseList,
        timing: TypewriterTiming,
        paused: watch::Receiver<bool>,
    ) -> HeroResult<TypewriterHandle> {
        Self::spawn_with(Typewriter::new(phrases), timing, paused)
    }

    /// Start driving an existing typewriter state.
    pub fn spawn_with(
        typewriter: Typewriter,
        timing: TypewriterTiming,
        paused: watch::Receiver<bool>,
    ) -> HeroResult<TypewriterHandle> {
        // Only the phrase advance may be immediate; a zero tick would spin
        // the loop without ever yielding.
        timing.validate()?;

        let initial = typewriter.snapshot(*paused.borrow());
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);

        info!(
            phrases = typewriter.phrases().len(),
            "Starting typewriter engine"
        );
        let task = tokio::spawn(run(typewriter, timing, paused, snapshot_tx));

        Ok(TypewriterHandle { snapshot_rx, task })
    }
}

/// Owner of a running typewriter task.
///
/// Dropping the handle tears the engine down; the armed delay is cancelled
/// with the task.
pub struct TypewriterHandle {
    snapshot_rx: watch::Receiver<TypewriterSnapshot>,
    task: JoinHandle<()>,
}

impl TypewriterHandle {
    /// Latest published snapshot.
    pub fn snapshot(&self) -> TypewriterSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TypewriterSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stop the engine. The armed delay is cancelled; a tick already being
    /// applied on another worker may still publish one last snapshot.
    pub fn shutdown(&self) {
        if !self.task.is_finished() {
            debug!("Shutting down typewriter engine");
            self.task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut typewriter: Typewriter,
    timing: TypewriterTiming,
    mut paused: watch::Receiver<bool>,
    snapshot_tx: watch::Sender<TypewriterSnapshot>,
) {
    loop {
        let is_paused = *paused.borrow_and_update();
        publish(&snapshot_tx, &typewriter, is_paused);

        if is_paused {
            wait_for_change(&mut paused).await;
            continue;
        }

        let step = typewriter.next_step(&timing);
        if step.delay.is_zero() {
            typewriter.advance();
            continue;
        }

        tokio::select! {
            biased;
            _ = wait_for_change(&mut paused) => {
                debug!(action = ?step.action, "pause signal changed, cancelling armed delay");
            }
            _ = tokio::time::sleep(step.delay) => {
                typewriter.advance();
            }
        }
    }
}

/// Resolve on the next pause-signal change. If the signal's producer is
/// gone the last value is final, so this never resolves.
async fn wait_for_change(paused: &mut watch::Receiver<bool>) {
    if paused.changed().await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn publish(
    snapshot_tx: &watch::Sender<TypewriterSnapshot>,
    typewriter: &Typewriter,
    paused: bool,
) {
    let next = typewriter.snapshot(paused);
    snapshot_tx.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}
