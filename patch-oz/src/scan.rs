// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use memchr::memmem;

/// Returns the offset of every occurrence of `needle` in `haystack`, in ascending order
///
/// Matches never overlap: scanning resumes after the end of each match. An empty `needle` matches
/// nothing.
///
/// # Examples
///
/// ```
/// let offsets = patch_oz::find_all(b"abc\0xyz abc\0", b"abc\0");
///
/// assert_eq!(offsets, [0, 8]);
/// ```
#[must_use]
pub fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    memmem::find_iter(haystack, needle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matches() {
        assert!(find_all(b"Hello, world!", b"moon").is_empty());
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert!(find_all(b"abc", b"abcd").is_empty());
    }

    #[test]
    fn empty_needle() {
        assert!(find_all(b"abc", b"").is_empty());
    }

    #[test]
    fn match_at_both_ends() {
        assert_eq!(find_all(b"url\0 padding url\0", b"url\0"), [0, 13]);
    }

    #[test]
    fn whole_haystack() {
        assert_eq!(find_all(b"url\0", b"url\0"), [0]);
    }

    #[test]
    fn overlapping_occurrences_are_skipped() {
        assert_eq!(find_all(b"aaaaa", b"aa"), [0, 2]);
    }
}
