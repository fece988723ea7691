//! Capability-scoped filesystem helpers.
//!
//! Output files and the log file are written through `cap-std` directory
//! handles. These helpers resolve a UTF-8 path into an open directory handle,
//! creating missing directories on the way.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::instagram::HarvestError;

/// Opens `path` as a directory, creating it and any missing parents first.
///
/// Relative paths resolve against the current directory. Creating a
/// directory that already exists is not an error.
///
/// # Errors
///
/// Returns [`HarvestError::Io`] when a directory cannot be created or opened.
pub fn open_or_create_dir(path: &Utf8Path, label: &str) -> Result<Dir, HarvestError> {
    let (base, relative) = if path.is_absolute() {
        let root = open_ambient("/", label)?;
        let relative = path.strip_prefix("/").map_err(|_| HarvestError::Io {
            message: format!("failed to normalise {label} directory '{path}'"),
        })?;
        (root, relative)
    } else {
        (open_ambient(".", label)?, path)
    };

    if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        return Ok(base);
    }

    base.create_dir_all(relative)
        .map_err(|error| HarvestError::Io {
            message: format!("failed to create {label} directory '{path}': {error}"),
        })?;
    base.open_dir(relative).map_err(|error| HarvestError::Io {
        message: format!("failed to open {label} directory '{path}': {error}"),
    })
}

/// Splits a file path into its parent directory and file name.
///
/// # Errors
///
/// Returns [`HarvestError::Io`] when the path has no file name.
pub fn split_file_path<'a>(
    path: &'a Utf8Path,
    label: &str,
) -> Result<(&'a Utf8Path, &'a str), HarvestError> {
    let file_name = path.file_name().ok_or_else(|| HarvestError::Io {
        message: format!("invalid {label} path '{path}': no file name"),
    })?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    Ok((parent, file_name))
}

fn open_ambient(path: &str, label: &str) -> Result<Dir, HarvestError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| HarvestError::Io {
        message: format!("failed to open base directory '{path}' for {label}: {error}"),
    })
}
