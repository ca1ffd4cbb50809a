use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CompileError {
  #[error("Failed to start shader compiler '{}' for source file '{}'", compiler.display(), source.display())]
  CompilerStartFail {
    compiler: PathBuf,
    source: PathBuf,
    #[source]
    cause: std::io::Error,
  },
}

/// Spawn the external compiler as `<compiler> <source> -o <artifact>`,
/// inheriting the parent's standard streams, and block until it exits.
///
/// Only failing to start the compiler at all is an error. The child's exit
/// status is returned but a failing compilation is not fatal; it is logged
/// at `warn` level and the caller is expected to keep going.
pub fn invoke_compiler(compiler: &Path, source: &Path, artifact: &Path) -> Result<ExitStatus, CompileError> {
  let status = Command::new(compiler)
    .arg(source)
    .arg("-o")
    .arg(artifact)
    .status()
    .map_err(|cause| CompileError::CompilerStartFail {
      compiler: compiler.to_path_buf(),
      source: source.to_path_buf(),
      cause,
    })?;
  if !status.success() {
    warn!("Shader compiler reported failure ({}) for source file '{}'", status, source.display());
  }
  Ok(status)
}
