//! External solver boundary.
//!
//! - `config`  — solver invocation configuration
//! - `process` — blocking invocation and the solve pipeline
//! - `task`    — cancellable worker for a running solve
//! - `error`   — process and pipeline errors

pub mod config;
pub mod error;
pub mod process;
pub mod task;

pub use config::RunConfig;
pub use error::{RunError, SolveError};
pub use process::{run_solver, solve};
pub use task::SolveTask;
