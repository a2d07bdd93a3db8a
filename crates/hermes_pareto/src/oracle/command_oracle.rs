use std::{
    io::{BufWriter, ErrorKind, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use tracing::{debug, warn};

use crate::{
    problem::{problem_instance::ProblemInstance, search_options::SearchOptions},
    solution::solution::Solution,
};

use super::solver_oracle::{OracleError, SolverOracle};

pub const DEFAULT_SOLVER_PROGRAM: &str = "vroom";

/// Runs a solver executable once per call: the instance is written as JSON to
/// its stdin and the solution is read as JSON from its stdout.
pub struct CommandOracle {
    program: PathBuf,
}

impl CommandOracle {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandOracle {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVER_PROGRAM)
    }
}

impl SolverOracle for CommandOracle {
    fn solve(
        &self,
        instance: ProblemInstance,
        options: &SearchOptions,
    ) -> Result<Solution, OracleError> {
        debug!(
            "CommandOracle: running {} with {} vehicles",
            self.program.display(),
            instance.vehicles.len()
        );

        let payload = serde_json::to_vec(&instance)?;

        let mut child = Command::new(&self.program)
            .args(options.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OracleError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // A solver may answer and exit before reading its whole input. The
        // write error only matters when nothing came back.
        let write_error = child.stdin.take().and_then(|stdin| {
            let mut writer = BufWriter::with_capacity(64 * 1024, stdin);
            writer
                .write_all(&payload)
                .and_then(|()| writer.flush())
                .err()
        });

        let output = child.wait_with_output()?;

        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            return Err(match write_error {
                Some(error) if error.kind() != ErrorKind::BrokenPipe => OracleError::Io(error),
                _ => OracleError::NoOutput {
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                },
            });
        }

        if let Some(error) = write_error {
            warn!(
                "CommandOracle: {} stopped reading its input: {error}",
                self.program.display()
            );
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
