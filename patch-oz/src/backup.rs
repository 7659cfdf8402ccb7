// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{config::PatchConfig, error::PatchError};

/// Where the pristine bytes of a target were read from
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Source {
    /// An existing backup was read. The target itself was not read.
    Backup,
    /// The target was read and a backup of it was just created.
    Target,
}

/// The unpatched contents of a target file
#[derive(Debug)]
pub struct Pristine {
    data: Vec<u8>,
    source: Source,
    backup: PathBuf,
}

impl Pristine {
    /// The unpatched bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes `self`, returning the unpatched bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Where the bytes were read from
    pub fn source(&self) -> Source {
        self.source
    }

    /// Path of the backup file
    pub fn backup(&self) -> &Path {
        &self.backup
    }
}

/// Returns the backup path for `target`, i.e., `target` with `suffix` appended to its file name
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// assert_eq!(
///     patch_oz::backup_path("bin/SecondLife.exe", ".orig"),
///     Path::new("bin/SecondLife.exe.orig"),
/// );
/// ```
pub fn backup_path<P>(target: P, suffix: &str) -> PathBuf
where
    P: AsRef<Path>,
{
    let mut path = target.as_ref().as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

/// Reads the unpatched contents of `target`, creating a backup of it on first use
///
/// If a backup already exists it is read instead of `target` and left untouched, so patching an
/// already patched file starts over from the original. Otherwise `target` is read and its contents
/// are saved to the backup path before being returned.
///
/// # Errors
///
/// Returns [`PatchError::BackupIsTarget`] if the configured suffix is empty,
/// [`PatchError::Read`] if the backup exists but cannot be read, and [`PatchError::Backup`] if
/// `target` cannot be read or the backup cannot be written. A failed backup write never leaves a
/// partial backup behind.
///
/// # Examples
///
/// ```no_run
/// use patch_oz::{PatchConfig, Source};
///
/// # fn main() -> Result<(), patch_oz::PatchError> {
/// let pristine = patch_oz::read_pristine("SecondLife.exe", &PatchConfig::default())?;
///
/// if pristine.source() == Source::Target {
///     println!("saved backup to '{}'", pristine.backup().display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn read_pristine<P>(target: P, config: &PatchConfig) -> Result<Pristine, PatchError>
where
    P: AsRef<Path>,
{
    let target = target.as_ref();
    let backup = backup_path(target, config.get_backup_suffix());
    if backup == target {
        return Err(PatchError::BackupIsTarget { path: backup });
    }

    match fs::read(&backup) {
        Ok(data) => {
            debug!(backup = %backup.display(), len = data.len(), "read existing backup");

            return Ok(Pristine {
                data,
                source: Source::Backup,
                backup,
            });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(PatchError::Read {
                path: backup,
                source,
            });
        }
    }

    let data = fs::read(target)
        .and_then(|data| write_backup(&backup, &data).map(|()| data))
        .map_err(|source| PatchError::Backup {
            target: target.to_path_buf(),
            backup: backup.clone(),
            source,
        })?;
    info!(backup = %backup.display(), len = data.len(), "saved original file");

    Ok(Pristine {
        data,
        source: Source::Target,
        backup,
    })
}

/// Writes `data` to a temporary file next to `backup` and renames it into place
fn write_backup(backup: &Path, data: &[u8]) -> io::Result<()> {
    let dir = backup
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    file.persist(backup)?;

    Ok(())
}
