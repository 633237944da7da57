//! Cancellable solve worker.

use std::process::{Child, Command};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::config::RunConfig;
use crate::error::RunError;
use crate::process::exit_result;

/// A solver run on a worker thread. The caller may block on
/// [`SolveTask::join`], poll [`SolveTask::is_finished`], or request
/// termination with [`SolveTask::cancel`]. No internal deadline exists;
/// a timeout must be layered around `join` by the caller.
///
/// After a cancellation the owning model must be marked invalid and not
/// reused for another solve.
#[derive(Debug)]
pub struct SolveTask {
    child: Arc<Mutex<Option<Child>>>,
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<Result<(), RunError>>>,
}

impl SolveTask {
    /// Spawn the solver process and the worker that monitors it. Spawn
    /// failures surface immediately on the calling thread.
    pub fn spawn(config: &RunConfig, model_file: &std::path::Path) -> Result<SolveTask, RunError> {
        let process = Command::new(config.command())
            .args(config.args())
            .arg(model_file)
            .current_dir(config.working_dir())
            .spawn()?;
        debug!(
            component = "run",
            operation = "spawn",
            command = config.command(),
            pid = process.id(),
            "solver worker started"
        );

        let child = Arc::new(Mutex::new(Some(process)));
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = thread::spawn({
            let child = Arc::clone(&child);
            let cancelled = Arc::clone(&cancelled);
            let poll = config.poll_interval();
            move || monitor(&child, &cancelled, poll)
        });

        Ok(SolveTask {
            child,
            cancelled,
            handle: Some(handle),
        })
    }

    /// Request termination of the running solver. Idempotent; the worker
    /// reports [`RunError::Cancelled`] once the process is gone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Ok(mut guard) = self.child.lock() {
            if let Some(child) = guard.as_mut() {
                let _ = child.kill();
            }
        }
    }

    /// Whether the worker has produced a result.
    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(JoinHandle::is_finished)
            .unwrap_or(true)
    }

    /// Block until the worker finishes and return its result.
    pub fn join(mut self) -> Result<(), RunError> {
        let handle = self.handle.take().ok_or(RunError::WorkerLost)?;
        handle.join().map_err(|_| RunError::WorkerLost)?
    }
}

impl Drop for SolveTask {
    fn drop(&mut self) {
        // A task dropped while running must not leak the child process.
        if self.handle.is_some() {
            self.cancel();
        }
    }
}

fn monitor(
    child: &Mutex<Option<Child>>,
    cancelled: &AtomicBool,
    poll: Duration,
) -> Result<(), RunError> {
    loop {
        {
            let mut guard = child.lock().map_err(|_| RunError::WorkerLost)?;
            let Some(process) = guard.as_mut() else {
                return Err(RunError::WorkerLost);
            };
            if cancelled.load(Ordering::SeqCst) {
                let _ = process.kill();
                let _ = process.wait();
                *guard = None;
                return Err(RunError::Cancelled);
            }
            if let Some(status) = process.try_wait()? {
                *guard = None;
                // A kill racing with normal exit still reports as a
                // cancellation.
                if cancelled.load(Ordering::SeqCst) {
                    return Err(RunError::Cancelled);
                }
                return exit_result(status);
            }
        }
        thread::sleep(poll);
    }
}
