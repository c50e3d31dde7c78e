use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

/// One-shot work deferred to the next frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTask {
    /// Fade the preloader out once the current frame has been presented.
    HidePreloader,
    /// Rebuild dirty element geometry.
    RebuildGeometry,
}

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle {
    task: FrameTask,
    generation: u64,
}

/// Explicit one-shot frame-task queue.
///
/// Scheduling the same task kind twice before the next frame coalesces into a
/// single entry, so repeat requests (e.g. `progress` set to 1 several times)
/// are deduplicated by construction rather than relying on the task itself
/// being idempotent.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: IndexMap<FrameTask, u64>,
    next_generation: u64,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` for the next frame, coalescing with any pending entry
    /// of the same kind.
    pub fn schedule_once(&mut self, task: FrameTask) -> TaskHandle {
        let generation = match self.pending.get(&task) {
            Some(generation) => *generation,
            None => {
                self.next_generation += 1;
                trace!(?task, "scheduling frame task");
                self.pending.insert(task, self.next_generation);
                self.next_generation
            }
        };
        TaskHandle { task, generation }
    }

    /// Cancels a pending task if the handle still refers to it.
    ///
    /// Returns `true` when an entry was removed. A stale handle (the task
    /// already ran, or was re-scheduled after running) is a no-op.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        if self.pending.get(&handle.task) == Some(&handle.generation) {
            self.pending.shift_remove(&handle.task);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_scheduled(&self, task: FrameTask) -> bool {
        self.pending.contains_key(&task)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drains every pending task in scheduling order. Called once per frame.
    pub fn take_due(&mut self) -> SmallVec<[FrameTask; 4]> {
        self.pending.drain(..).map(|(task, _)| task).collect()
    }
}
