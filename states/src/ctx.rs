use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::{Receiver, Sender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::updater::UpdateMessage;
use crate::{
    Command, CommandSnapshot, Compute, Dep, Error, Graph, LatestOnlyUpdater, State,
    StateSyncStatus, TaskHandle, TaskId, TopologyError, Updater,
};

pub(crate) struct ComputeSlot {
    pub(crate) compute: Box<dyn Compute>,
    status: StateSyncStatus,
}

struct CommandSlot {
    command: Arc<dyn Command>,
    name: &'static str,
    generation: Arc<AtomicU64>,
    running: Option<TaskHandle>,
}

/// Owns every state, compute and command of one mounted feature.
///
/// Frame loop: `sync_computes()` drains task results and re-derives computes,
/// the UI renders from `state`/`cached`, then user input goes through
/// `update`/`dispatch`.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    commands: BTreeMap<TypeId, CommandSlot>,
    queue: Vec<TypeId>,
    graph: Graph<TypeId>,
    send: Sender<UpdateMessage>,
    recv: Receiver<UpdateMessage>,
    tasks: JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            graph: Graph::new(),
            send,
            recv,
            tasks: JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
        self.mark_dependents_dirty(TypeId::of::<T>());
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        for dep in compute.deps().iter() {
            self.graph.route_to(*dep, id);
        }
        self.computes.insert(
            id,
            ComputeSlot {
                compute: Box::new(compute),
                status: StateSyncStatus::BeforeInit,
            },
        );
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(
            TypeId::of::<T>(),
            CommandSlot {
                command: Arc::new(command),
                name: type_name::<T>(),
                generation: Arc::new(AtomicU64::new(0)),
                running: None,
            },
        );
    }

    /// Checks the recorded compute dependencies form a DAG.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or(Error::StateNotFound {
                type_name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access; marks every compute derived from `T` dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.mark_dependents_dirty(TypeId::of::<T>());
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    Error::StateNotFound {
                        type_name: type_name::<T>()
                    }
                )
            })
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never recorded.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>().unwrap_or_else(|| {
            panic!(
                "{}",
                Error::ComputeNotFound {
                    type_name: type_name::<T>()
                }
            )
        })
    }

    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes
            .get(&TypeId::of::<T>())
            .map(|slot| slot.status)
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Replaces a compute right away, bypassing the update channel.
    ///
    /// Results already queued by commands still apply on the next
    /// `sync_computes`, so acknowledging one outcome never swallows another.
    ///
    /// # Panics
    /// Panics if `T` was never recorded.
    pub fn set_compute<T: Compute + Send>(&mut self, value: T) {
        let id = TypeId::of::<T>();
        let Some(slot) = self.computes.get_mut(&id) else {
            panic!(
                "{}",
                Error::ComputeNotFound {
                    type_name: type_name::<T>()
                }
            );
        };
        slot.compute.assign_box(Box::new(value));
        self.mark_dependents_dirty(id);
    }

    pub fn mark_dirty(&mut self, id: &TypeId) {
        if let Some(slot) = self.computes.get_mut(id) {
            slot.status = StateSyncStatus::Dirty;
        }
    }

    pub fn mark_clean(&mut self, id: &TypeId) {
        if let Some(slot) = self.computes.get_mut(id) {
            slot.status = StateSyncStatus::Clean;
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let dependents: Vec<TypeId> = self.graph.dependents(id).iter().copied().collect();
        for dependent in dependents {
            self.mark_dirty(&dependent);
        }
    }

    pub fn enqueue_command<T: Command>(&mut self) {
        self.queue.push(TypeId::of::<T>());
    }

    /// Enqueues `T` and flushes immediately.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    /// Spawns every queued command on the current Tokio runtime.
    ///
    /// Each command sees a snapshot taken right before it starts. A newer run
    /// of the same command cancels the previous one and bumps the generation
    /// so that anything the old run still sends is discarded.
    pub fn flush_commands(&mut self) {
        let queue = std::mem::take(&mut self.queue);
        for id in queue {
            let snapshot = self.snapshot();
            let Some(slot) = self.commands.get_mut(&id) else {
                log::error!("dispatched a command that was never recorded: {id:?}");
                continue;
            };

            if let Some(previous) = slot.running.take() {
                previous.cancel();
            }

            let generation = slot.generation.fetch_add(1, Ordering::AcqRel) + 1;
            let token = CancellationToken::new();
            slot.running = Some(TaskHandle::new(TaskId::new(id, generation), token.clone()));

            let updater = LatestOnlyUpdater::new(
                Updater::new(self.send.clone()),
                id,
                generation,
                Arc::clone(&slot.generation),
            );
            let future = slot.command.run(snapshot, updater, token.clone());
            log::debug!("dispatch {} (generation {generation})", slot.name);

            self.tasks.spawn(async move {
                tokio::select! {
                    () = token.cancelled() => {}
                    () = future => {}
                }
            });
        }
    }

    /// Newest generation handed out for `T`, 0 if never dispatched.
    pub fn latest_generation<T: Command>(&self) -> u64 {
        self.commands
            .get(&TypeId::of::<T>())
            .map(|slot| slot.generation.load(Ordering::Acquire))
            .unwrap_or(0)
    }

    fn snapshot(&self) -> CommandSnapshot {
        let states = self
            .states
            .iter()
            .filter_map(|(id, state)| state.clone_boxed().map(|boxed| (*id, boxed)))
            .collect();
        let computes = self
            .computes
            .iter()
            .filter_map(|(id, slot)| slot.compute.clone_boxed().map(|boxed| (*id, boxed)))
            .collect();
        CommandSnapshot::new(states, computes)
    }

    /// Applies finished task results and re-derives dirty computes.
    pub fn sync_computes(&mut self) {
        self.reap_finished_tasks();
        self.apply_pending_updates();

        // Derived computes publish through the same channel; a chain of N
        // derived computes settles within N rounds.
        for _ in 0..=self.computes.len() {
            if !self.run_computed() {
                break;
            }
            self.apply_pending_updates();
        }
    }

    /// Runs every dirty compute once. Returns whether anything ran.
    pub fn run_computed(&mut self) -> bool {
        let dirty: Vec<TypeId> = self
            .computes
            .iter()
            .filter(|(_, slot)| slot.status.needs_run())
            .map(|(id, _)| *id)
            .collect();
        if dirty.is_empty() {
            return false;
        }

        for id in &dirty {
            self.mark_clean(id);
        }

        let updater = self.updater();
        for id in &dirty {
            if let Some(slot) = self.computes.get(id) {
                slot.compute
                    .compute(Dep::new(&self.states, &self.computes), updater.clone());
            }
        }
        true
    }

    fn apply_pending_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.recv.try_recv() {
            if let Some((command, generation)) = message.stamp
                && !self.is_latest_generation(command, generation)
            {
                log::debug!("discarding stale update from generation {generation}");
                continue;
            }

            let Some(slot) = self.computes.get_mut(&message.target) else {
                log::warn!("update for a compute that was never recorded: {:?}", message.target);
                continue;
            };
            slot.compute.assign_box(message.value);
            applied += 1;
            self.mark_dependents_dirty(message.target);
        }
        applied
    }

    fn is_latest_generation(&self, command: TypeId, generation: u64) -> bool {
        self.commands
            .get(&command)
            .is_some_and(|slot| slot.generation.load(Ordering::Acquire) == generation)
    }

    fn reap_finished_tasks(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result
                && err.is_panic()
            {
                log::error!("command task panicked: {err}");
            }
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_set_mut(&mut self) -> &mut JoinSet<()> {
        &mut self.tasks
    }

    /// Cancels every running command and waits for the tasks to stop.
    pub async fn shutdown(&mut self) {
        for slot in self.commands.values_mut() {
            if let Some(handle) = slot.running.take() {
                handle.cancel();
            }
        }
        self.tasks.shutdown().await;
        self.queue.clear();
    }
}
