//! Reactive state runtime shared by the roster business and UI crates.
//!
//! - [`State`]: plain values owned by the context and mutated by the UI.
//! - [`Compute`]: cached values, either derived from their dependencies or
//!   written by a [`Command`] through an [`Updater`].
//! - [`Command`]: manual-only async work (network IO) dispatched by the UI.
//!
//! The UI reads through [`StateCtx::cached`] / [`StateCtx::state`] and writes
//! through [`StateCtx::update`] / [`StateCtx::dispatch`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::{LatestOnlyUpdater, Updater};
