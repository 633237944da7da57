//! Blocking solver invocation and the end-to-end solve pipeline.

use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use ampler_core::Model;
use ampler_data::MemoryStore;
use tracing::debug;

use crate::config::RunConfig;
use crate::error::{RunError, SolveError};

pub(crate) fn exit_result(status: ExitStatus) -> Result<(), RunError> {
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(RunError::NonzeroExit { status: code }),
        None => Err(RunError::Terminated),
    }
}

/// Run the external solver on a model file and block until it exits.
/// Any nonzero exit status is a hard failure carrying that status.
pub fn run_solver(config: &RunConfig, model_file: &Path) -> Result<(), RunError> {
    let started = Instant::now();
    let status = Command::new(config.command())
        .args(config.args())
        .arg(model_file)
        .current_dir(config.working_dir())
        .status()?;
    debug!(
        component = "run",
        operation = "run_solver",
        command = config.command(),
        model_file = %model_file.display(),
        exit = status.code().unwrap_or(-1),
        duration_ms = started.elapsed().as_millis() as u64,
        "solver process finished"
    );
    exit_result(status)
}

/// The full solve pipeline: export the model's data, write the store
/// snapshot and model text into the working directory, invoke the
/// solver, and read the store back with the solution fields filled in.
/// A failed invocation invalidates the model.
pub fn solve(model: &mut Model, config: &RunConfig) -> Result<MemoryStore, SolveError> {
    let data_path = config
        .working_dir()
        .join(format!("{}_data.json", model.name()));
    let model_path = config.working_dir().join(format!("{}.gms", model.name()));

    let mut store = MemoryStore::new();
    model.export_data(&mut store)?;
    store.save(&data_path).map_err(SolveError::Store)?;
    let text = model.render_model(&data_path)?;
    std::fs::write(&model_path, text).map_err(RunError::Io)?;

    if let Err(err) = run_solver(config, &model_path) {
        model.invalidate();
        return Err(SolveError::Run(err));
    }
    let solved = MemoryStore::load(&data_path)?;
    Ok(solved)
}
