//! Solver invocation errors.

use ampler_core::ModelError;
use ampler_data::StoreError;

/// Process-boundary failures.
#[derive(Debug)]
pub enum RunError {
    Io(std::io::Error),
    /// Solver exited with a nonzero status. Hard failure, no
    /// partial-success interpretation.
    NonzeroExit { status: i32 },
    /// Solver was killed by a signal outside our cancellation path.
    Terminated,
    /// Solve was cancelled; the owning model must be invalidated.
    Cancelled,
    /// Worker task disappeared without reporting a result.
    WorkerLost,
}

impl RunError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            RunError::Io(_) => "RUN_IO",
            RunError::NonzeroExit { .. } => "RUN_NONZERO_EXIT",
            RunError::Terminated => "RUN_TERMINATED",
            RunError::Cancelled => "RUN_CANCELLED",
            RunError::WorkerLost => "RUN_WORKER_LOST",
        }
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Io(err) => write!(f, "[{}] {}", self.code(), err),
            RunError::NonzeroExit { status } => write!(
                f,
                "[{}] Solver exited with status {}",
                self.code(),
                status
            ),
            RunError::Terminated => {
                write!(f, "[{}] Solver was terminated by a signal", self.code())
            }
            RunError::Cancelled => write!(f, "[{}] Solve was cancelled", self.code()),
            RunError::WorkerLost => {
                write!(f, "[{}] Solve worker exited without a result", self.code())
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        RunError::Io(err)
    }
}

/// Failures of the end-to-end solve pipeline.
#[derive(Debug)]
pub enum SolveError {
    Model(ModelError),
    Store(StoreError),
    Run(RunError),
}

impl SolveError {
    /// Returns the wrapped error's semantic code.
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::Model(inner) => inner.code(),
            SolveError::Store(inner) => inner.code(),
            SolveError::Run(inner) => inner.code(),
        }
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Model(inner) => inner.fmt(f),
            SolveError::Store(inner) => inner.fmt(f),
            SolveError::Run(inner) => inner.fmt(f),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Model(inner) => Some(inner),
            SolveError::Store(inner) => Some(inner),
            SolveError::Run(inner) => Some(inner),
        }
    }
}

impl From<ModelError> for SolveError {
    fn from(err: ModelError) -> Self {
        SolveError::Model(err)
    }
}

impl From<StoreError> for SolveError {
    fn from(err: StoreError) -> Self {
        SolveError::Store(err)
    }
}

impl From<RunError> for SolveError {
    fn from(err: RunError) -> Self {
        SolveError::Run(err)
    }
}
