//! Input path resolution
//!
//! File names given on the command line are joined onto the input directory,
//! including names written as absolute paths.

use std::path::{Component, Path, PathBuf};

/// Input directory used when neither `--input.dir` nor `TOPWORDS_INPUT_DIR` is set
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Join a file name onto the input directory
///
/// Root and prefix components of `name` are dropped, so an absolute name still
/// lands under `dir`.
pub fn resolve_input(dir: &Path, name: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) | Component::CurDir | Component::ParentDir => {
                path.push(component)
            }
            Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}

/// Absolute form of `path` without resolving symlinks or touching the filesystem
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
