use std::any::{Any, type_name};

/// Produces an owned, `Send` copy of a value for command snapshots.
///
/// Values that commands never read can keep the default and stay out of
/// snapshots.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

pub trait State: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replaces `target` with the boxed value when the types line up.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::warn!("ignored assignment of mismatched value to {}", type_name::<T>()),
    }
}
