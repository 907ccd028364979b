//! Per-frame animation tasks.
//!
//! A task is re-invoked once per tick (animation frame or interval) until it
//! reports `Done`. Open-ended tasks such as the cursor glow never finish on
//! their own; wrap them in `Stoppable` to cancel them explicitly.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Continue,
    Done,
}

pub trait AnimationTask {
    /// `now_ms` is a monotonic timestamp in milliseconds.
    fn tick(&mut self, now_ms: f64) -> TaskStatus;
}

impl<F> AnimationTask for F
where
    F: FnMut(f64) -> TaskStatus,
{
    fn tick(&mut self, now_ms: f64) -> TaskStatus {
        self(now_ms)
    }
}

/// Shared cancellation flag for a running task.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

pub struct Stoppable<T> {
    inner: T,
    handle: StopHandle,
}

impl<T: AnimationTask> Stoppable<T> {
    pub fn new(inner: T) -> (Self, StopHandle) {
        let handle = StopHandle::new();
        (
            Self {
                inner,
                handle: handle.clone(),
            },
            handle,
        )
    }
}

impl<T: AnimationTask> AnimationTask for Stoppable<T> {
    fn tick(&mut self, now_ms: f64) -> TaskStatus {
        if self.handle.is_stopped() {
            return TaskStatus::Done;
        }
        self.inner.tick(now_ms)
    }
}

/// Drives a set of tasks with caller-supplied time. Finished tasks are
/// dropped on the tick that reports `Done`.
#[derive(Default)]
pub struct TaskRunner {
    tasks: Vec<Box<dyn AnimationTask>>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, task: impl AnimationTask + 'static) {
        self.tasks.push(Box::new(task));
    }

    pub fn spawn_boxed(&mut self, task: Box<dyn AnimationTask>) {
        self.tasks.push(task);
    }

    /// Runs every live task once; returns how many are still live.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        self.tasks
            .retain_mut(|t| t.tick(now_ms) == TaskStatus::Continue);
        self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
