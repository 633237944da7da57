//! Solver invocation configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// How to launch the external solver. The model file path is appended as
/// the final argument at spawn time.
#[derive(Debug, Clone)]
pub struct RunConfig {
    command: String,
    args: Vec<String>,
    working_dir: PathBuf,
    poll_interval: Duration,
}

impl RunConfig {
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> RunConfig {
        RunConfig {
            command: command.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            poll_interval: Duration::from_millis(25),
        }
    }

    /// The conventional GAMS invocation.
    pub fn gams(working_dir: impl Into<PathBuf>) -> RunConfig {
        RunConfig::new("gams", working_dir)
    }

    /// Extra arguments placed before the model file path.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> RunConfig {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// How often a worker task checks the child process and the cancel
    /// flag.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> RunConfig {
        self.poll_interval = poll_interval;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[cfg(test)]
mod tests {
    use super::RunConfig;
    use std::time::Duration;

    #[test]
    fn gams_constructor_uses_the_conventional_command() {
        let config = RunConfig::gams("/tmp/work");
        assert_eq!(config.command(), "gams");
        assert!(config.args().is_empty());
        assert_eq!(config.poll_interval(), Duration::from_millis(25));
    }

    #[test]
    fn builders_override_defaults() {
        let config = RunConfig::new("gams", "/tmp/work")
            .with_args(["lo=0"])
            .with_poll_interval(Duration::from_millis(5));
        assert_eq!(config.command(), "gams");
        assert_eq!(config.args(), ["lo=0".to_string()]);
        assert_eq!(config.poll_interval(), Duration::from_millis(5));
    }
}
