//! Background work bound to the view that started it.
//!
//! Each [`ViewTask`] owns at most one running tokio task plus a generation
//! counter. Starting a new task aborts the previous one and bumps the
//! generation, so results that still arrive from an older run can be told
//! apart and dropped. Cancelling or dropping the slot aborts the task.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct ViewTask {
    name: &'static str,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl ViewTask {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: 0,
            handle: None,
        }
    }

    /// Abort any running task and spawn the one built by `make`.
    ///
    /// `make` receives the new generation, which the task should send back
    /// with its result.
    pub fn start<F, Fut>(&mut self, make: F) -> u64
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.abort_running();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.handle = Some(tokio::spawn(make(generation)));
        tracing::debug!(task = self.name, generation, "Started view task");
        generation
    }

    /// Abort the running task. Results already in flight become stale.
    pub fn cancel(&mut self) {
        if self.abort_running() {
            self.generation = self.generation.wrapping_add(1);
            tracing::debug!(task = self.name, "Cancelled view task");
        }
    }

    /// Whether a result tagged `generation` belongs to the latest run.
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    /// Accept a result for `generation`, releasing the slot. Stale results
    /// return false and leave the slot untouched.
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(
                task = self.name,
                generation,
                current = self.generation,
                "Discarding stale task result"
            );
            return false;
        }
        self.handle = None;
        true
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn abort_running(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for ViewTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(task = self.name, "Aborted view task on drop");
        }
    }
}

/// Run `future`, turning a panic into `Err(message)`.
///
/// A panic inside a spawned task would otherwise only surface as a dropped
/// `JoinHandle`; catching it lets the task report back to the UI loop.
pub async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(panic_message)
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("Unknown panic: {:?}", (*panic).type_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_restart_makes_previous_result_stale() {
        let mut task = ViewTask::new("test");
        let first = task.start(|_| async {});
        let second = task.start(|_| async {});

        assert_ne!(first, second);
        assert!(!task.finish(first));
        assert!(task.finish(second));
        assert!(!task.finish(second), "a result is accepted once");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_running_task() {
        let (tx, mut rx) = mpsc::channel::<u64>(1);
        let mut task = ViewTask::new("test");
        let generation = task.start(|generation| async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = tx.send(generation).await;
        });

        task.cancel();
        assert!(!task.is_current(generation));

        tokio::time::sleep(Duration::from_secs(2)).await;
        // The sender was dropped with the aborted task
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_running_task() {
        let (tx, mut rx) = mpsc::channel::<u64>(1);
        {
            let mut task = ViewTask::new("test");
            task.start(|generation| async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let _ = tx.send(generation).await;
            });
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_catch_task_panic_reports_message() {
        let ok = catch_task_panic(async { 7 }).await;
        assert_eq!(ok, Ok(7));

        let err = catch_task_panic(async {
            if ok.is_ok() {
                panic!("catalog exploded");
            }
        })
        .await;
        assert_eq!(err, Err("catalog exploded".to_string()));

        let formatted = catch_task_panic(async {
            let city = "Boston";
            if ok.is_ok() {
                panic!("no data for {city}");
            }
        })
        .await;
        assert_eq!(formatted, Err("no data for Boston".to_string()));
    }

    #[tokio::test]
    async fn test_cancel_without_task_keeps_generation() {
        let mut task = ViewTask::new("test");
        task.cancel();
        assert_eq!(task.generation(), 0);
        assert!(!task.is_running());
    }
}
