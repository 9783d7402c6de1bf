//! Persisting rendered pages.
//!
//! Each page lands at `<dir>/<slug>.html`. Existing files are overwritten
//! unconditionally, and nothing is rolled back if a later write fails.

use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Create an output directory (and any missing parents). An existing
/// directory is left as it is.
pub fn prepare_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Output path for a slug inside `dir`.
pub fn page_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{slug}.html"))
}

/// Write one page as UTF-8, replacing any file already at that path.
pub fn write_page(dir: &Path, slug: &str, page: Markup) -> Result<PathBuf, WriteError> {
    let path = page_path(dir, slug);
    fs::write(&path, page.into_string()).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
