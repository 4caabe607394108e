//! File reading for the tally inputs
//!
//! Existence is checked first so a missing file can be reported as
//! recoverable. Any failure after that point is `UnreadableFile`. Readers own
//! their file handle, so it is released on success and on error alike.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::error::TallyError;
use crate::core::model::Load;
use crate::core::paths::{absolute_path, resolve_input};

/// Ensure `path` names a regular file (following symlinks)
pub fn check_regular_file(path: &Path) -> Result<(), TallyError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        _ => Err(TallyError::FileNotFound {
            path: absolute_path(path),
        }),
    }
}

/// Resolve the file named by option `arg` under `dir`
///
/// Returns `Missing` when the option was not given or the resolved path is not a
/// regular file.
pub fn locate_input(dir: &Path, name: Option<&str>, arg: &'static str) -> Load<PathBuf> {
    let Some(name) = name else {
        return Load::Missing(TallyError::MissingOption { name: arg });
    };
    let path = resolve_input(dir, name);
    match check_regular_file(&path) {
        Ok(()) => Load::Loaded(path),
        Err(err) => Load::Missing(err),
    }
}

fn open(path: &Path) -> Result<File, TallyError> {
    File::open(path).map_err(|source| TallyError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Open `path` for line-by-line reading
pub fn open_lines(path: &Path) -> Result<BufReader<File>, TallyError> {
    Ok(BufReader::new(open(path)?))
}

/// Read the whole of `path` as UTF-8 text
pub fn read_to_string(path: &Path) -> Result<String, TallyError> {
    let mut content = String::new();
    BufReader::new(open(path)?)
        .read_to_string(&mut content)
        .map_err(|source| TallyError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content)
}
