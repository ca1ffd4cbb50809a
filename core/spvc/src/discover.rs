use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// A discovered shader source, along with the extension that matched it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchedSource {
  pub path: PathBuf,
  pub extension: String,
}

#[derive(Error, Debug)]
pub enum DiscoverError {
  #[error("Failed to walk the source root directory")]
  WalkFail(#[from] walkdir::Error),
}

/// Recursively collect all files under `root` (the root itself included,
/// hidden subdirectories descended into like any other) whose file name ends
/// with `.<extension>` for one of `extensions`. Matches are returned in
/// directory traversal order, then extension order; no sorting is imposed.
pub fn find_shader_sources(root: &Path, extensions: &[String]) -> Result<Vec<MatchedSource>, DiscoverError> {
  let suffixes: Vec<String> = extensions.iter().map(|extension| format!(".{}", extension)).collect();
  let mut sources = Vec::new();
  for entry in WalkDir::new(root) {
    let entry = entry?;
    if !entry.file_type().is_file() { continue; }
    let matched = {
      let file_name = entry.file_name().to_string_lossy();
      suffixes.iter().position(|suffix| file_name.ends_with(suffix.as_str()))
    };
    if let Some(index) = matched {
      sources.push(MatchedSource { path: entry.into_path(), extension: extensions[index].clone() });
    }
  }
  Ok(sources)
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::path::PathBuf;

  use crate::discover::find_shader_sources;

  fn scratch_tree(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("spvc_discover_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    root
  }

  fn extensions() -> Vec<String> {
    vec!["vert".to_string(), "frag".to_string()]
  }

  #[test]
  fn matches_at_any_depth_including_the_root() {
    let root = scratch_tree("depth");
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::write(root.join("top.vert"), "").unwrap();
    fs::write(root.join("a/mid.frag"), "").unwrap();
    fs::write(root.join("a/b/deep.vert"), "").unwrap();

    let sources = find_shader_sources(&root, &extensions()).unwrap();
    let mut paths: Vec<_> = sources.into_iter().map(|s| s.path).collect();
    paths.sort();
    let mut expected = vec![root.join("top.vert"), root.join("a/mid.frag"), root.join("a/b/deep.vert")];
    expected.sort();
    assert_eq!(paths, expected);

    let _ = fs::remove_dir_all(&root);
  }

  #[test]
  fn ignores_files_with_unrecognized_extensions() {
    let root = scratch_tree("unrecognized");
    fs::write(root.join("notes.txt"), "").unwrap();
    fs::write(root.join("x.vert.spv"), "").unwrap();
    fs::write(root.join("vert"), "").unwrap();
    fs::write(root.join("x.vert"), "").unwrap();

    let sources = find_shader_sources(&root, &extensions()).unwrap();
    let paths: Vec<_> = sources.into_iter().map(|s| s.path).collect();
    assert_eq!(paths, vec![root.join("x.vert")]);

    let _ = fs::remove_dir_all(&root);
  }

  #[test]
  fn descends_into_hidden_directories() {
    let root = scratch_tree("hidden");
    fs::create_dir_all(root.join(".cache")).unwrap();
    fs::write(root.join(".cache/x.frag"), "").unwrap();

    let sources = find_shader_sources(&root, &extensions()).unwrap();
    let paths: Vec<_> = sources.into_iter().map(|s| s.path).collect();
    assert_eq!(paths, vec![root.join(".cache/x.frag")]);

    let _ = fs::remove_dir_all(&root);
  }

  #[test]
  fn records_the_extension_that_matched() {
    let root = scratch_tree("extension");
    fs::write(root.join("x.vert"), "").unwrap();
    fs::write(root.join("y.frag"), "").unwrap();

    let mut sources = find_shader_sources(&root, &extensions()).unwrap();
    sources.sort_by(|a, b| a.path.cmp(&b.path));
    assert_eq!(sources[0].path, root.join("x.vert"));
    assert_eq!(sources[0].extension, "vert");
    assert_eq!(sources[1].path, root.join("y.frag"));
    assert_eq!(sources[1].extension, "frag");

    let _ = fs::remove_dir_all(&root);
  }

  #[test]
  fn empty_tree_yields_no_matches() {
    let root = scratch_tree("empty");
    let sources = find_shader_sources(&root, &extensions()).unwrap();
    assert!(sources.is_empty());
    let _ = fs::remove_dir_all(&root);
  }
}
