use std::any::{Any, TypeId, type_name};

use crate::{Dep, SnapshotClone, Updater};

/// The states and computes a [`Compute`] is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeDeps {
    pub states: Vec<TypeId>,
    pub computes: Vec<TypeId>,
}

impl ComputeDeps {
    /// For computes written only by commands.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(states: Vec<TypeId>, computes: Vec<TypeId>) -> Self {
        Self { states, computes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeId> {
        self.states.iter().chain(self.computes.iter())
    }
}

pub trait Compute: Any + SnapshotClone {
    fn deps(&self) -> ComputeDeps;

    /// Recalculates the value from `deps` and publishes it via `updater`.
    ///
    /// Runs implicitly whenever a dependency changes, so it must stay free of
    /// side effects. Network IO belongs in a `Command`.
    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::warn!("ignored assignment of mismatched value to {}", type_name::<T>()),
    }
}
