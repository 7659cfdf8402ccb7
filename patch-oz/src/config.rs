// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

/// Configuration for a patch operation.
///
/// The defaults match the layout the command line tool has always used, so most callers only need
/// [`PatchConfig::default()`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PatchConfig {
    backup_suffix: String,
}

impl PatchConfig {
    /// Creates a new configuration for patch operations
    ///
    /// This configuration can be reused across patch operations.
    pub fn new() -> Self {
        Self {
            backup_suffix: Self::DEFAULT_BACKUP_SUFFIX.to_owned(),
        }
    }

    /// Sets the suffix appended to the target's file name to form the backup path.
    ///
    /// The suffix is appended verbatim, so it should normally start with a `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use patch_oz::PatchConfig;
    ///
    /// let mut config = PatchConfig::new();
    /// config.backup_suffix(".pristine");
    ///
    /// assert_eq!(
    ///     patch_oz::backup_path("viewer.exe", config.get_backup_suffix()),
    ///     Path::new("viewer.exe.pristine"),
    /// );
    /// ```
    pub fn backup_suffix(&mut self, suffix: &str) -> &mut Self {
        suffix.clone_into(&mut self.backup_suffix);
        self
    }

    /// Returns the suffix appended to the target's file name to form the backup path
    pub fn get_backup_suffix(&self) -> &str {
        &self.backup_suffix
    }

    /// The default backup suffix
    pub const DEFAULT_BACKUP_SUFFIX: &str = ".orig";
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
