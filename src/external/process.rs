use std::io::Write;
use std::process::{Command, Stdio};
use log::debug;
use super::CollaboratorError;

/// Runs `program` to completion, optionally feeding `input` on stdin, and
/// returns its stdout.
pub fn run(program: &str, args: &[String], input: Option<&str>) -> Result<String, CollaboratorError> {
    debug!("Running {} {:?}", program, args);
    let spawn_err = |source: std::io::Error| CollaboratorError::Spawn { program: program.to_string(), source };

    let mut command = Command::new(program);
    command.args(args)
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().map_err(spawn_err)?;

    if let Some(input) = input {
        if let Some(mut stdin) = child.stdin.take() {
            // The child may exit before reading everything; its status tells us what happened
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                debug!("{}: stdin closed early: {}", program, e);
            }
        }
    }

    let output = child.wait_with_output().map_err(spawn_err)?;
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    debug!("{} exited with {}", program, output.status);
    if stderr.is_empty() {
        Err(CollaboratorError::SilentAbort)
    } else {
        Err(CollaboratorError::Fatal(stderr))
    }
}
