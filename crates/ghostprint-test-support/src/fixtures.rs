//! On-disk fixtures: sample documents and scripted executables.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Write a small document fixture into `dir` and return its path.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn sample_document(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join("sample.pdf");
    std::fs::write(&path, b"%PDF-1.4\n%fixture\n")
        .context("failed to write the sample document")?;
    Ok(path)
}

/// A scripted stand-in for an external executable.
///
/// The script records its argv, one line per argument, into a log file that
/// lives as long as this value.
#[cfg(unix)]
#[derive(Debug)]
pub struct ScriptedExecutable {
    _dir: tempfile::TempDir,
    program: PathBuf,
    argv_log: PathBuf,
}

#[cfg(unix)]
impl ScriptedExecutable {
    /// Path of the scripted program.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments the script was invoked with.
    ///
    /// # Errors
    ///
    /// Returns an error when the script has not run yet.
    pub fn recorded_args(&self) -> anyhow::Result<Vec<String>> {
        let raw = std::fs::read_to_string(&self.argv_log).context("argv log was not written")?;
        Ok(raw.lines().map(str::to_string).collect())
    }

    /// Whether the script ran at least once.
    #[must_use]
    pub fn ran(&self) -> bool {
        self.argv_log.exists()
    }
}

/// Script that records its argv and exits with `exit_code`.
///
/// # Errors
///
/// Returns an error when the script cannot be written.
#[cfg(unix)]
pub fn scripted_executable(exit_code: i32) -> anyhow::Result<ScriptedExecutable> {
    scripted_executable_with(&format!("exit {exit_code}"))
}

/// Script that records its argv and then sleeps for `seconds`.
///
/// # Errors
///
/// Returns an error when the script cannot be written.
#[cfg(unix)]
pub fn sleeping_executable(seconds: u32) -> anyhow::Result<ScriptedExecutable> {
    scripted_executable_with(&format!("sleep {seconds}"))
}

#[cfg(unix)]
fn scripted_executable_with(tail: &str) -> anyhow::Result<ScriptedExecutable> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().context("failed to create the script directory")?;
    let program = dir.path().join("scripted");
    let argv_log = dir.path().join("argv.log");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{tail}\n",
        argv_log.display()
    );
    std::fs::write(&program, script).context("failed to write the script")?;
    std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755))
        .context("failed to mark the script executable")?;
    Ok(ScriptedExecutable {
        _dir: dir,
        program,
        argv_log,
    })
}
