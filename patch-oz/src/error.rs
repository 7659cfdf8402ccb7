// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};

/// An error indicating that patching a file failed.
///
/// # Examples
///
/// ```
/// use patch_oz::{PatchError, Pattern};
///
/// let pattern = Pattern::new("short", "much too long");
///
/// assert!(matches!(pattern, Err(PatchError::ReplacementTooLong { len: 14, max: 6 })));
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum PatchError {
    /// The NUL-terminated replacement does not fit in the space of the NUL-terminated search string
    ReplacementTooLong {
        /// Length of the terminated replacement in bytes
        len: usize,
        /// Length of the terminated search string in bytes
        max: usize,
    },
    /// The search string does not occur in the data
    NotFound,
    /// The backup path is the target itself, so no separate backup can be kept
    BackupIsTarget {
        /// Path of the file being patched
        path: PathBuf,
    },
    /// The existing backup could not be read
    Read {
        /// Path of the file being read
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
    /// Reading the target or saving its backup failed
    Backup {
        /// Path of the file being patched
        target: PathBuf,
        /// Path the backup was to be written to
        backup: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
    /// Writing the patched data back failed
    Write {
        /// Path of the file being written
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
}

impl Display for PatchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatchError::ReplacementTooLong { len, max } => write!(
                f,
                "replacement is longer than the original: {len} bytes, at most {max} allowed",
            ),
            PatchError::NotFound => write!(f, "failed to find the search string"),
            PatchError::BackupIsTarget { path } => write!(
                f,
                "backup path is the same as the file being patched: '{}'",
                path.display(),
            ),
            PatchError::Read { path, .. } => write!(f, "failed to read '{}'", path.display()),
            PatchError::Backup { target, backup, .. } => write!(
                f,
                "failed to read '{}' into '{}'",
                target.display(),
                backup.display(),
            ),
            PatchError::Write { path, .. } => write!(f, "failed to save '{}'", path.display()),
        }
    }
}

impl Error for PatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PatchError::Read { source, .. }
            | PatchError::Backup { source, .. }
            | PatchError::Write { source, .. } => Some(source),
            PatchError::ReplacementTooLong { .. }
            | PatchError::NotFound
            | PatchError::BackupIsTarget { .. } => None,
        }
    }
}
