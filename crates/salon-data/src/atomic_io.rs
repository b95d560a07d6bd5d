//! Atomic file writes for the export sinks.
//!
//! Output files are written to a hidden temporary sibling and renamed into
//! place, so an interrupted run never leaves a half-written workbook or
//! document behind.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opens an existing output directory.
///
/// The directory is never created: a missing directory is reported so the
/// caller can decide whether that is fatal.
///
/// # Errors
///
/// Returns [`ExportError::OutputDirectory`] if the path is not valid UTF-8,
/// does not exist, or cannot be opened.
pub(crate) fn open_output_dir(path: &Path) -> Result<Dir, ExportError> {
    let utf8 = utf8_path(path)?;
    Dir::open_ambient_dir(&utf8, ambient_authority()).map_err(|err| {
        ExportError::OutputDirectory {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })
}

/// Splits a file path into its opened parent directory and file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
///
/// Returns [`ExportError::OutputDirectory`] if the parent cannot be opened,
/// or [`ExportError::WriteError`] if the path has no file name.
pub(crate) fn open_parent(path: &Path) -> Result<(Dir, Utf8PathBuf), ExportError> {
    let utf8 = utf8_path(path)?;
    let file_name = utf8
        .file_name()
        .ok_or_else(|| ExportError::WriteError {
            path: path.to_path_buf(),
            message: "output path must name a file".to_owned(),
        })?
        .to_owned();
    let parent = match utf8.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    let dir = open_output_dir(parent.as_std_path())?;
    Ok((dir, Utf8PathBuf::from(file_name)))
}

fn utf8_path(path: &Path) -> Result<Utf8PathBuf, ExportError> {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).map_err(|_| ExportError::OutputDirectory {
        path: path.to_path_buf(),
        message: "path is not valid UTF-8".to_owned(),
    })
}

/// Writes `contents` to `name` inside `dir` atomically.
///
/// `display_path` is the path reported in errors; it should be the path the
/// user supplied rather than the directory-relative name.
///
/// # Errors
///
/// Returns [`ExportError::WriteError`] if `name` is not a plain file name or
/// the temporary file cannot be written or renamed.
pub(crate) fn write_atomic(
    dir: &Dir,
    name: &Utf8Path,
    display_path: &Path,
    contents: &[u8],
) -> Result<(), ExportError> {
    let mut components = name.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(write_error(display_path, &"output path must be a file"));
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{file_name}.tmp.{}.{suffix}.{counter}",
        std::process::id()
    );

    write_temp_file(dir, &tmp_name, display_path, contents)?;
    if let Err(err) = rename_into_place(dir, &tmp_name, file_name) {
        if dir.remove_file(&tmp_name).is_err() {
            // Temp file already gone.
        }
        return Err(write_error(display_path, &err));
    }
    sync_directory(dir);

    Ok(())
}

fn write_temp_file(
    dir: &Dir,
    tmp_name: &str,
    display_path: &Path,
    contents: &[u8],
) -> Result<(), ExportError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| write_error(display_path, &err))?;

    if let Err(err) = file.write_all(contents).and_then(|()| file.sync_all()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(display_path, &err));
    }

    Ok(())
}

fn write_error(path: &Path, message: &dyn fmt::Display) -> ExportError {
    ExportError::WriteError {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

#[cfg(windows)]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Best effort only.
    }
}
