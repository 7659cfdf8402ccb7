// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::PatchError;

/// The login URL compiled into the viewer
pub const LOGIN_URL: &str = "https://login.aditi.lindenlab.com/cgi-bin/login.cgi";

/// The replacement URL used when none is given
pub const DEFAULT_URL: &str = "http://127.0.0.1:8080/";

/// A NUL-terminated search string and the NUL-terminated replacement written over it
///
/// The replacement is never longer than the search string, so patching never grows the data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pattern {
    search: Vec<u8>,
    replacement: Vec<u8>,
}

impl Pattern {
    /// Creates a new `Pattern` replacing `search` with `replacement`.
    ///
    /// Both strings are encoded as UTF-8 and terminated with a single NUL byte. The terminator
    /// ends the string early when the replacement is shorter than the original.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ReplacementTooLong`] if the terminated replacement is longer than the
    /// terminated search string.
    ///
    /// # Examples
    ///
    /// ```
    /// use patch_oz::Pattern;
    ///
    /// # fn main() -> Result<(), patch_oz::PatchError> {
    /// let pattern = Pattern::new("http://old.example/", "http://new/")?;
    ///
    /// assert_eq!(pattern.search(), b"http://old.example/\0");
    /// assert_eq!(pattern.replacement(), b"http://new/\0");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(search: &str, replacement: &str) -> Result<Self, PatchError> {
        let search = terminated(search);
        let replacement = terminated(replacement);

        if replacement.len() > search.len() {
            return Err(PatchError::ReplacementTooLong {
                len: replacement.len(),
                max: search.len(),
            });
        }

        Ok(Self {
            search,
            replacement,
        })
    }

    /// Creates a new `Pattern` replacing [`LOGIN_URL`] with `replacement`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::ReplacementTooLong`] if `replacement` is longer than [`LOGIN_URL`].
    pub fn login_url(replacement: &str) -> Result<Self, PatchError> {
        Self::new(LOGIN_URL, replacement)
    }

    /// The NUL-terminated bytes to search for
    pub fn search(&self) -> &[u8] {
        &self.search
    }

    /// The NUL-terminated bytes written over each match
    pub fn replacement(&self) -> &[u8] {
        &self.replacement
    }
}

fn terminated(s: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(s.len() + 1);
    bytes.extend_from_slice(s.as_bytes());
    bytes.push(0);
    bytes
}
