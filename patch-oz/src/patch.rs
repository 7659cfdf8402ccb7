// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    backup::{self, Source},
    config::PatchConfig,
    error::PatchError,
    pattern::Pattern,
    scan,
};

/// The outcome of a successful [`patch_file()`] call
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatchReport {
    source: Source,
    backup: PathBuf,
    file_len: usize,
    offsets: Vec<usize>,
}

impl PatchReport {
    /// Where the unpatched bytes were read from
    pub fn source(&self) -> Source {
        self.source
    }

    /// Path of the backup file
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// Length of the patched file in bytes, which is also the length of the original
    pub fn file_len(&self) -> usize {
        self.file_len
    }

    /// Offsets of every patched occurrence, in ascending order
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

/// Overwrites every occurrence of the search string in `data` with the replacement
///
/// Only the first `pattern.replacement().len()` bytes of each occurrence are written. Any
/// remaining bytes of the old string are left in place after the replacement's NUL terminator, so
/// the length of `data` never changes. Returns the offsets of the patched occurrences.
///
/// # Errors
///
/// Returns [`PatchError::NotFound`] if the search string does not occur in `data`. `data` is left
/// unmodified in that case.
///
/// # Examples
///
/// ```
/// use patch_oz::Pattern;
///
/// # fn main() -> Result<(), patch_oz::PatchError> {
/// let pattern = Pattern::new("https://old/", "http://n/")?;
/// let mut data = b"https://old/\0".to_vec();
///
/// patch_oz::patch_in_place(&mut data, &pattern)?;
///
/// assert_eq!(data, b"http://n/\0d/\0");
/// # Ok(())
/// # }
/// ```
pub fn patch_in_place(data: &mut [u8], pattern: &Pattern) -> Result<Vec<usize>, PatchError> {
    let offsets = scan::find_all(data, pattern.search());
    if offsets.is_empty() {
        return Err(PatchError::NotFound);
    }

    let replacement = pattern.replacement();
    for &offset in &offsets {
        debug!(offset, "patching match");
        data[offset..offset + replacement.len()].copy_from_slice(replacement);
    }

    Ok(offsets)
}

/// Writes patched `data` back to `target`, replacing its contents
///
/// # Errors
///
/// Returns [`PatchError::Write`] if `target` cannot be written.
pub fn write_patched<P>(target: P, data: &[u8]) -> Result<(), PatchError>
where
    P: AsRef<Path>,
{
    let target = target.as_ref();

    fs::write(target, data).map_err(|source| PatchError::Write {
        path: target.to_path_buf(),
        source,
    })?;
    info!(target = %target.display(), len = data.len(), "saved changes");

    Ok(())
}

/// Patches the file at `target` in place
///
/// This is a convenience function that reads the pristine contents with
/// [`read_pristine()`](crate::read_pristine), patches them with [`patch_in_place()`], and writes
/// the result back to `target` with [`write_patched()`].
///
/// # Errors
///
/// Returns an error if reading the pristine contents fails, if the search string is not found, or
/// if writing `target` fails. Nothing is written to `target` unless a match was found, but a
/// backup may already have been created.
///
/// # Examples
///
/// ```no_run
/// use patch_oz::{PatchConfig, Pattern};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pattern = Pattern::login_url("http://login.osgrid.org/")?;
/// let report = patch_oz::patch_file("SecondLife.exe", &pattern, &PatchConfig::default())?;
///
/// println!("patched {} occurrence(s)", report.offsets().len());
/// # Ok(())
/// # }
/// ```
pub fn patch_file<P>(
    target: P,
    pattern: &Pattern,
    config: &PatchConfig,
) -> Result<PatchReport, PatchError>
where
    P: AsRef<Path>,
{
    let target = target.as_ref();

    let pristine = backup::read_pristine(target, config)?;
    let source = pristine.source();
    let backup = pristine.backup().to_path_buf();
    let mut data = pristine.into_data();
    debug!(len = data.len(), ?source, "searching for login URL");

    let offsets = patch_in_place(&mut data, pattern)?;

    write_patched(target, &data)?;

    Ok(PatchReport {
        source,
        backup,
        file_len: data.len(),
        offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_replacement_leaves_tail() {
        let pattern = Pattern::new("abcdef", "xy").unwrap();
        let mut data = b"--abcdef\0--".to_vec();

        let offsets = patch_in_place(&mut data, &pattern).unwrap();

        assert_eq!(offsets, [2]);
        assert_eq!(data, b"--xy\0def\0--");
    }

    #[test]
    fn equal_length_replacement() {
        let pattern = Pattern::new("abc", "xyz").unwrap();
        let mut data = b"abc\0".to_vec();

        patch_in_place(&mut data, &pattern).unwrap();

        assert_eq!(data, b"xyz\0");
    }

    #[test]
    fn every_match_patched() {
        let pattern = Pattern::new("url", "u").unwrap();
        let mut data = b"url\0 url \0url\0".to_vec();

        let offsets = patch_in_place(&mut data, &pattern).unwrap();

        assert_eq!(offsets, [0, 10]);
        assert_eq!(data, b"u\0l\0 url \0u\0l\0");
    }

    #[test]
    fn unterminated_occurrence_ignored() {
        let pattern = Pattern::new("url", "u").unwrap();
        let mut data = b"url/path".to_vec();

        assert!(matches!(
            patch_in_place(&mut data, &pattern),
            Err(PatchError::NotFound)
        ));
        assert_eq!(data, b"url/path");
    }

    #[test]
    fn match_ending_at_last_byte() {
        let pattern = Pattern::new("end", "e").unwrap();
        let mut data = b"0123end\0".to_vec();

        let offsets = patch_in_place(&mut data, &pattern).unwrap();

        assert_eq!(offsets, [4]);
        assert_eq!(data, b"0123e\0d\0");
    }

    #[test]
    fn write_into_missing_directory() {
        let target = std::env::temp_dir()
            .join("patch-oz-missing-directory")
            .join("viewer.exe");

        assert!(matches!(
            write_patched(&target, b"patched"),
            Err(PatchError::Write { path, .. }) if path == target
        ));
    }
}
