use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;

use crate::Compute;

/// A compute value on its way from a task (or derivation) to the context.
pub(crate) struct UpdateMessage {
    pub(crate) target: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
    /// Issuing command and its generation, checked again when applied.
    pub(crate) stamp: Option<(TypeId, u64)>,
}

/// Sends new compute values to the owning `StateCtx`.
///
/// Values are applied on the next `StateCtx::sync_computes`.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<UpdateMessage>,
}

impl Updater {
    pub(crate) fn new(send: Sender<UpdateMessage>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        self.send_message(UpdateMessage {
            target: TypeId::of::<T>(),
            value: Box::new(value),
            stamp: None,
        });
    }

    fn send_message(&self, message: UpdateMessage) {
        if self.send.send(message).is_err() {
            log::warn!("state context dropped before an update could be delivered");
        }
    }
}

/// Updater owned by one command run.
///
/// Every dispatch of a command type bumps a shared generation counter. Writes
/// from a run whose generation is no longer the newest are discarded, both
/// here and again when the context applies them, so a slow stale response can
/// never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    command: TypeId,
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(
        inner: Updater,
        command: TypeId,
        generation: u64,
        latest: Arc<AtomicU64>,
    ) -> Self {
        Self {
            inner,
            command,
            generation,
            latest,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_latest(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }

    /// Returns `false` when the value was dropped as stale.
    pub fn set<T: Compute + Send>(&self, value: T) -> bool {
        if !self.is_latest() {
            log::debug!(
                "dropping stale {} from generation {}",
                type_name::<T>(),
                self.generation
            );
            return false;
        }

        self.inner.send_message(UpdateMessage {
            target: TypeId::of::<T>(),
            value: Box::new(value),
            stamp: Some((self.command, self.generation)),
        });
        true
    }
}
