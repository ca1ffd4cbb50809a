//! Drive an external shader compiler over a tree of shader sources:
//!
//! - [Discover vertex and fragment shader sources under a source root](discover)
//! - [Derive the compiled artifact path for a source](artifact)
//! - [Invoke the external compiler once per source](compile)

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::artifact::artifact_path;
use crate::compile::{invoke_compiler, CompileError};
use crate::discover::{find_shader_sources, DiscoverError};

pub mod discover;
pub mod artifact;
pub mod compile;

/// External compiler program, resolved by the spawning environment.
pub const DEFAULT_COMPILER: &str = "glslc";
/// Suffix marking compiled binary shader blobs.
pub const ARTIFACT_MARKER: &str = "spv";
/// Recognized shader source extensions, in match order.
pub const SHADER_EXTENSIONS: [&str; 2] = ["vert", "frag"];


// Driver options

#[derive(Clone, Debug)]
pub struct Options {
  pub source_root: PathBuf,
  pub compiler: PathBuf,
  pub extensions: Vec<String>,
  pub artifact_marker: String,
}

impl Options {
  /// Options for compiling all vertex and fragment shader sources under
  /// `source_root` with the default compiler into `.spv` artifacts.
  pub fn from_source_root(source_root: impl Into<PathBuf>) -> Self {
    Self {
      source_root: source_root.into(),
      compiler: PathBuf::from(DEFAULT_COMPILER),
      extensions: SHADER_EXTENSIONS.iter().map(|extension| extension.to_string()).collect(),
      artifact_marker: ARTIFACT_MARKER.to_string(),
    }
  }
}


// Driver

pub struct Driver {
  options: Options,
}

/// Counts reported by a completed run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
  pub matched: usize,
  pub invoked: usize,
}

#[derive(Error, Debug)]
pub enum RunError {
  #[error(transparent)]
  DiscoverFail(#[from] DiscoverError),
  #[error(transparent)]
  CompileFail(#[from] CompileError),
}

impl Driver {
  pub fn new(options: Options) -> Self {
    Self { options }
  }

  pub fn options(&self) -> &Options {
    &self.options
  }

  /// Single linear pass: enumerate matching sources, then compile each one
  /// sequentially in discovery order, writing every artifact next to its
  /// source. A traversal fault or a compiler that cannot be started aborts
  /// the remaining matches; a compiler that runs and fails does not.
  pub fn run(&self) -> Result<RunSummary, RunError> {
    let sources = find_shader_sources(&self.options.source_root, &self.options.extensions)?;
    let mut summary = RunSummary { matched: sources.len(), invoked: 0 };
    for source in &sources {
      let artifact = artifact_path(&source.path, &source.extension, &self.options.artifact_marker);
      debug!("Compiling '{}' into '{}'", source.path.display(), artifact.display());
      invoke_compiler(&self.options.compiler, &source.path, &artifact)?;
      summary.invoked += 1;
    }
    Ok(summary)
  }
}
