//! Process boundary integration tests, driven by `sh` stand-ins for the
//! real solver.

use std::time::Duration;

use ampler_core::{Model, ModelError, Phase, Sense};
use ampler_data::{Field, MemoryStore, SymbolStore};
use ampler_expr::{le, Equation, Parameter, Set, VarKind, Variable};
use ampler_run::{run_solver, solve, RunConfig, RunError, SolveError, SolveTask};

fn shell(dir: &std::path::Path, script: &str) -> RunConfig {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    RunConfig::new("sh", dir)
        .with_args(["-c", script])
        .with_poll_interval(Duration::from_millis(5))
}

fn key(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

fn small_model() -> Model {
    let i = Set::new("i", ["a", "b"]);
    let cap = Parameter::over("cap", [&i]).with_values(vec![10.0, 20.0]);
    let x = Variable::over("x", VarKind::Positive, [&i]);
    let z = Variable::new("z", VarKind::Free);
    let limit = Equation::over("limit", [&i]).defined_by(le(&x, &cap).expect("relation"));

    let mut model = Model::new("small");
    model.add_set(&i).expect("add");
    model.add_parameter(&cap).expect("add");
    model.add_variable(&x).expect("add");
    model.add_variable(&z).expect("add");
    model.add_equation(&limit).expect("add");
    model.set_objective(&z, Sense::Minimize).expect("objective");
    model
}

#[test]
fn zero_exit_is_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "exit 0");
    run_solver(&config, &dir.path().join("model.gms")).expect("clean exit");
}

#[test]
fn nonzero_exit_carries_the_status() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "exit 3");
    let err = run_solver(&config, &dir.path().join("model.gms")).unwrap_err();
    assert!(matches!(err, RunError::NonzeroExit { status: 3 }));
}

#[test]
fn solve_pipeline_writes_files_and_reads_the_store_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "exit 0");
    let mut model = small_model();

    let store = solve(&mut model, &config).expect("pipeline");
    assert!(dir.path().join("small.gms").exists());
    assert!(dir.path().join("small_data.json").exists());
    assert_eq!(store.set_members("i"), Some(&[key(&["a"]), key(&["b"])][..]));
    let levels = store.get_field("cap", Field::Level).expect("levels");
    assert_eq!(levels[&key(&["b"])], 20.0);
}

#[test]
fn failed_solve_invalidates_the_model() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "exit 2");
    let mut model = small_model();

    let err = solve(&mut model, &config).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Run(RunError::NonzeroExit { status: 2 })
    ));
    assert_eq!(model.phase(), Phase::Invalid);
}

#[test]
fn a_running_task_can_be_joined() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "exit 0");
    let task = SolveTask::spawn(&config, &dir.path().join("model.gms")).expect("spawn");
    task.join().expect("clean exit");
}

#[test]
fn cancellation_kills_the_solver() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "sleep 30");
    let task = SolveTask::spawn(&config, &dir.path().join("model.gms")).expect("spawn");

    task.cancel();
    let err = task.join().unwrap_err();
    assert!(matches!(err, RunError::Cancelled));
}

#[test]
fn a_cancelled_solve_invalidates_the_owning_model() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "sleep 30");
    let mut model = small_model();
    let task = SolveTask::spawn(&config, &dir.path().join("small.gms")).expect("spawn");

    task.cancel();
    let err = task.join().unwrap_err();
    assert!(matches!(err, RunError::Cancelled));

    // The owner marks the model invalid after the cancellation; any
    // further use is rejected.
    model.invalidate();
    assert_eq!(model.phase(), Phase::Invalid);
    let mut store = MemoryStore::new();
    let err = model.export_data(&mut store).unwrap_err();
    assert_eq!(err, ModelError::Invalidated);
    assert_eq!(err.code(), "MODEL_INVALIDATED");
}

#[test]
fn a_finished_task_reports_nonzero_exit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = shell(dir.path(), "exit 7");
    let task = SolveTask::spawn(&config, &dir.path().join("model.gms")).expect("spawn");

    let err = task.join().unwrap_err();
    assert!(matches!(err, RunError::NonzeroExit { status: 7 }));
}
