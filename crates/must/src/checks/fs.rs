//! Filesystem existence checks. Every call queries metadata afresh.
//!
//! A path counts as missing when the lookup reports not-found, or when a component that
//! should be a directory is a regular file (`<file>/child`). Other metadata errors
//! (permissions, I/O) leave the check passing and are logged at debug level.

use crate::failure::abort;

use std::fs;
use std::io;
use std::path::Path;

#[inline]
fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

#[track_caller]
pub fn file_exists<P: AsRef<Path>>(path: P, message: &str) {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if is_missing(&e) => abort(
            message,
            &format!("expected file {} to exist, but it does not", path.display()),
        ),
        Err(e) => log::debug!("file_exists: metadata query failed: path={path:?} err={e}"),
    }
}

#[track_caller]
pub fn dir_exists<P: AsRef<Path>>(path: P, message: &str) {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => abort(
            message,
            &format!("expected {} to be a directory, but it is not", path.display()),
        ),
        Err(e) if is_missing(&e) => abort(
            message,
            &format!(
                "expected directory {} to exist, but it does not",
                path.display()
            ),
        ),
        Err(e) => log::debug!("dir_exists: metadata query failed: path={path:?} err={e}"),
    }
}
