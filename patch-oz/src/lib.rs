// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! In-place replacement of the hardcoded login URL inside a Second Life viewer executable.
//!
//! The viewer binary is treated as an opaque byte blob. Every NUL-terminated occurrence of
//! [`LOGIN_URL`] is overwritten with a replacement URL, which must fit in the space of the original
//! string. The first time a file is patched, its pristine contents are saved next to it (by
//! default with an `.orig` suffix), and every later run patches from that backup, so patching is
//! repeatable.
//!
//! # Examples
//!
//! Patching a viewer to log in to a local grid:
//!
//! ```no_run
//! use patch_oz::{PatchConfig, Pattern};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pattern = Pattern::login_url("http://127.0.0.1:8080/")?;
//! let report = patch_oz::patch_file("SecondLife.exe", &pattern, &PatchConfig::default())?;
//!
//! for offset in report.offsets() {
//!     println!("patched at {offset:#x}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Patching a buffer that is already in memory:
//!
//! ```
//! use patch_oz::Pattern;
//!
//! # fn main() -> Result<(), patch_oz::PatchError> {
//! let pattern = Pattern::new("https://example.com/login", "http://a/")?;
//! let mut data = b"..https://example.com/login\0..".to_vec();
//!
//! let offsets = patch_oz::patch_in_place(&mut data, &pattern)?;
//!
//! assert_eq!(offsets, [2]);
//! assert!(data.starts_with(b"..http://a/\0"));
//! # Ok(())
//! # }
//! ```

mod backup;
mod config;
mod error;
mod patch;
mod pattern;
mod scan;

pub use backup::{Pristine, Source, backup_path, read_pristine};
pub use config::PatchConfig;
pub use error::PatchError;
pub use patch::{PatchReport, patch_file, patch_in_place, write_patched};
pub use pattern::{DEFAULT_URL, LOGIN_URL, Pattern};
pub use scan::find_all;
