//! Reversible state transitions with a bounded undo window.
//!
//! Every transition is written to the store immediately. The caller gets an
//! [`UndoHandle`] holding the pre-transition snapshot; until the window
//! closes the handle can perform the inverse write. When the window elapses
//! the coordinator's timer commits the handle and the snapshot is dropped.
//!
//! | Request | Store effect now | `undo()` | `commit()` |
//! |---|---|---|---|
//! | complete | `is_done = true` | `is_done = false` | - |
//! | restore | `is_done = false` | `is_done = true` | - |
//! | delete | hard delete | re-insert (new id) | - |
//! | move to ongoing | hard delete | re-insert completed (new id) | re-insert ongoing (new id) |
//!
//! Handles are independent: issuing a new transition for a record never
//! cancels an older handle, and whichever write lands last wins.

use super::error::{Result, TaskError};
use super::service::TaskService;
use super::task::Task;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Ongoing → Completed, flag flip.
    Complete,
    /// Completed → Ongoing, flag flip; the id is preserved.
    Restore,
    /// Ongoing or Completed → removed.
    Delete,
    /// Completed → removed, re-inserted as Ongoing on commit.
    MoveToOngoing,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionKind::Complete => "complete",
            TransitionKind::Restore => "restore",
            TransitionKind::Delete => "delete",
            TransitionKind::MoveToOngoing => "move_to_ongoing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    Pending,
    Committed,
    Undone,
}

struct HandleInner {
    kind: TransitionKind,
    snapshot: Task,
    service: TaskService,
    issued_at: Instant,
    window: Duration,
    // Held across the inverse/commit write so concurrent callers observe
    // the finished write.
    state: Mutex<HandleState>,
}

/// Undo token for one applied transition.
#[derive(Clone)]
pub struct UndoHandle {
    inner: Arc<HandleInner>,
}

impl fmt::Debug for UndoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoHandle")
            .field("kind", &self.inner.kind)
            .field("task_id", &self.inner.snapshot.id)
            .field("window", &self.inner.window)
            .finish()
    }
}

impl UndoHandle {
    fn new(kind: TransitionKind, snapshot: Task, service: TaskService, window: Duration) -> Self {
        UndoHandle {
            inner: Arc::new(HandleInner {
                kind,
                snapshot,
                service,
                issued_at: Instant::now(),
                window,
                state: Mutex::new(HandleState::Pending),
            }),
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.inner.kind
    }

    /// The task as it was before the transition.
    pub fn task(&self) -> &Task {
        &self.inner.snapshot
    }

    pub fn window(&self) -> Duration {
        self.inner.window
    }

    /// Time left before the timer commits the handle.
    pub fn remaining(&self) -> Duration {
        self.inner.window.saturating_sub(self.inner.issued_at.elapsed())
    }

    pub async fn state(&self) -> HandleState {
        *self.inner.state.lock().await
    }

    pub async fn is_pending(&self) -> bool {
        self.state().await == HandleState::Pending
    }

    /// Makes the transition final. Idempotent: only the first successful
    /// call on a pending handle has an effect, later calls (and calls after
    /// `undo`) return `Ok(())` without touching the store.
    ///
    /// If the re-insert of a move to ongoing fails the handle stays pending,
    /// so the commit can be retried or the move undone.
    pub async fn commit(&self) -> Result<()> {
        let mut state = self.inner.state.lock().await;
        if *state != HandleState::Pending {
            return Ok(());
        }

        if self.inner.kind == TransitionKind::MoveToOngoing {
            let draft = self.inner.snapshot.to_draft().done(false);
            let task = self.inner.service.add_task(draft).await?;
            tracing::info!(old_id = self.inner.snapshot.id, task_id = task.id, "task re-inserted as ongoing");
        }
        *state = HandleState::Committed;
        tracing::debug!(task_id = self.inner.snapshot.id, kind = %self.inner.kind, "transition committed");

        Ok(())
    }

    /// Reverses the transition and returns the task as now stored.
    ///
    /// Fails with `NotFound` once the handle is no longer pending (window
    /// expired, committed or already undone) and writes nothing in that
    /// case. If the inverse write itself fails the error is returned and the
    /// handle stays settled.
    pub async fn undo(&self) -> Result<Task> {
        let mut state = self.inner.state.lock().await;
        if *state != HandleState::Pending {
            return Err(TaskError::NotFound(self.inner.snapshot.id));
        }
        *state = HandleState::Undone;

        let snapshot = &self.inner.snapshot;
        let service = &self.inner.service;
        let restored = match self.inner.kind {
            TransitionKind::Complete | TransitionKind::Restore => {
                let mut current = service.require_task(snapshot.id).await?;
                current.is_done = snapshot.is_done;
                service.update_task(current).await?
            }
            TransitionKind::Delete => service.add_task(snapshot.to_draft()).await?,
            TransitionKind::MoveToOngoing => service.add_task(snapshot.to_draft().done(true)).await?,
        };
        tracing::info!(old_id = snapshot.id, task_id = restored.id, kind = %self.inner.kind, "transition undone");

        Ok(restored)
    }
}

/// Applies transitions through the service and issues timed undo handles.
#[derive(Clone)]
pub struct TransitionCoordinator {
    service: TaskService,
    window: Duration,
}

impl TransitionCoordinator {
    pub fn new(service: TaskService, window: Duration) -> Self {
        TransitionCoordinator { service, window }
    }

    pub fn service(&self) -> &TaskService {
        &self.service
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Ongoing → Completed.
    pub async fn request_complete(&self, task: &Task) -> Result<UndoHandle> {
        let current = self.service.require_task(task.id).await?;
        if current.is_done {
            return Err(TaskError::validation("is_done", "task is already completed"));
        }
        self.flip(current, TransitionKind::Complete).await
    }

    /// Completed → Ongoing, keeping the id.
    pub async fn request_restore(&self, task: &Task) -> Result<UndoHandle> {
        let current = self.service.require_task(task.id).await?;
        if !current.is_done {
            return Err(TaskError::validation("is_done", "task is not completed"));
        }
        self.flip(current, TransitionKind::Restore).await
    }

    /// Removes the task; `undo()` re-inserts it under a new id.
    pub async fn request_delete(&self, task: &Task) -> Result<UndoHandle> {
        let current = self.service.require_task(task.id).await?;
        self.service.delete_task(&current).await?;
        Ok(self.issue(TransitionKind::Delete, current))
    }

    /// Completed → Ongoing by delete and re-insert. The task is absent from
    /// both lists while the handle is pending.
    pub async fn request_move_to_ongoing(&self, task: &Task) -> Result<UndoHandle> {
        let current = self.service.require_task(task.id).await?;
        if !current.is_done {
            return Err(TaskError::validation("is_done", "task is not completed"));
        }
        self.service.delete_task(&current).await?;
        Ok(self.issue(TransitionKind::MoveToOngoing, current))
    }

    async fn flip(&self, current: Task, kind: TransitionKind) -> Result<UndoHandle> {
        let mut flipped = current.clone();
        flipped.is_done = !current.is_done;
        self.service.update_task(flipped).await?;
        Ok(self.issue(kind, current))
    }

    fn issue(&self, kind: TransitionKind, snapshot: Task) -> UndoHandle {
        tracing::info!(task_id = snapshot.id, kind = %kind, window_ms = self.window.as_millis() as u64, "transition applied");

        let handle = UndoHandle::new(kind, snapshot, self.service.clone(), self.window);
        let timer = handle.clone();
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if let Err(e) = timer.commit().await {
                tracing::error!(task_id = timer.task().id, kind = %timer.kind(), error = %e, "automatic commit failed");
            }
        });

        handle
    }
}
