use std::path::{Path, PathBuf};

/// Derive the compiled artifact path for a shader source.
///
/// The source path is truncated at the last `.` and `.<extension>.<marker>`
/// is appended, so only the final suffix is replaced: `a.b.vert` becomes
/// `a.b.vert.spv`, not `a.vert.spv`. A path without any `.` is appended to
/// without truncation. Pure function of its inputs.
pub fn artifact_path(source: &Path, extension: &str, marker: &str) -> PathBuf {
  let source = source.to_string_lossy();
  let truncated = match source.rfind('.') {
    Some(index) => &source[..index],
    None => source.as_ref(),
  };
  PathBuf::from(format!("{}.{}.{}", truncated, extension, marker))
}
