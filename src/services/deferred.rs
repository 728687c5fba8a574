//! Cancelable deferred host effects
//!
//! Commands such as `register` print their output immediately and ask the
//! host to act a little later. Each request becomes a task in this queue with
//! a due instant. The owner polls `take_due()` from its event loop and applies
//! the returned effects; nothing here spawns threads or timers.
//!
//! Tasks are independent: scheduling the same effects twice yields two tasks
//! that each fire once.

use crate::host::HostEffect;
use std::time::{Duration, Instant};

/// Handle to a scheduled task, usable for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

/// A scheduled group of host effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredTask {
    pub id: EffectId,
    pub due: Instant,
    /// Applied in order when the task fires
    pub effects: Vec<HostEffect>,
}

/// Queue of pending deferred tasks
#[derive(Debug, Default)]
pub struct DeferredEffects {
    tasks: Vec<DeferredTask>,
    next_id: u64,
}

impl DeferredEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effects` to fire once `delay` has elapsed after `now`
    pub fn schedule(
        &mut self,
        now: Instant,
        delay: Duration,
        effects: Vec<HostEffect>,
    ) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;

        let due = now + delay;
        tracing::debug!("Scheduled deferred task {:?} in {:?}: {:?}", id, delay, effects);
        self.tasks.push(DeferredTask { id, due, effects });
        id
    }

    /// Remove and return every task due at or before `now`
    ///
    /// Tasks come back ordered by due instant, then by scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|task| task.due <= now);
        self.tasks = pending;

        due.sort_by_key(|task| (task.due, task.id));
        due
    }

    /// Cancel one task. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: EffectId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Cancel every pending task, returning how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        if count > 0 {
            tracing::debug!("Cancelled {} pending deferred task(s)", count);
        }
        self.tasks.clear();
        count
    }

    /// Earliest due instant among pending tasks
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    pub fn is_pending(&self, id: EffectId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Number of pending tasks
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
