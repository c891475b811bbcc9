//! External evaluator boundary
//!
//! The core treats "execute this generated source text" as an opaque
//! service. [`HostEvaluator`] is the seam; [`CommandEvaluator`] is the
//! default implementation, handing the text to an external command.
//! Failures raised *inside* the evaluated program are not part of the
//! translation error taxonomy; they surface through [`EvalOutput`].

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::error::HostError;

/// A service that executes generated host source text.
pub trait HostEvaluator {
    /// Execute the source text and capture whatever the host produced.
    fn evaluate(&self, source: &str) -> Result<EvalOutput, HostError>;
}

/// Captured output of one host evaluation.
#[derive(Debug, Clone)]
pub struct EvalOutput {
    /// Console output of the evaluated program
    pub stdout: String,

    /// Diagnostic output of the evaluated program
    pub stderr: String,

    /// Host process exit code, when one was reported
    pub status: Option<i32>,
}

impl EvalOutput {
    /// Whether the host reported successful execution.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Evaluator that runs an external command on the generated source.
///
/// The command is resolved on the search path once, at construction. The
/// source text is written to a temporary file whose path is appended as the
/// command's final argument.
#[derive(Debug, Clone)]
pub struct CommandEvaluator {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandEvaluator {
    /// Resolve `command` on the search path and build an evaluator for it.
    pub fn new(command: &str) -> Result<Self, HostError> {
        let program = which::which(command).map_err(|source| HostError::CommandNotFound {
            command: command.to_string(),
            source,
        })?;
        Ok(Self {
            program,
            args: Vec::new(),
        })
    }

    /// Add fixed arguments passed before the source file path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl HostEvaluator for CommandEvaluator {
    fn evaluate(&self, source: &str) -> Result<EvalOutput, HostError> {
        let mut file = tempfile::Builder::new()
            .prefix("quickbeam-")
            .suffix(".csx")
            .tempfile()?;
        file.write_all(source.as_bytes())?;
        file.flush()?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file.path())
            .output()?;

        Ok(EvalOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_rejected() {
        let err = CommandEvaluator::new("quickbeam-no-such-host-command").unwrap_err();
        assert!(matches!(err, HostError::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_round_trip() {
        let evaluator = CommandEvaluator::new("sh").unwrap();
        let output = evaluator.evaluate("echo quickbeam").unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "quickbeam\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_host_failure_surfaces_in_output() {
        let evaluator = CommandEvaluator::new("sh").unwrap();
        let output = evaluator.evaluate("exit 3").unwrap();
        assert!(!output.success());
        assert_eq!(output.status, Some(3));
    }
}
