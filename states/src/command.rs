use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Manual-only side effect, run when the UI calls `StateCtx::dispatch`.
///
/// `run` executes synchronously at flush time and should only copy what it
/// needs out of `snap`; the returned future does the IO and reports through
/// `updater`. Dispatching the same command again cancels `cancel` of the
/// previous run and makes its updater stale.
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
