// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   write: write_atomic(), append_text()
//!   copy:  copy_file_async(), remove_if_exists()
//! ```

pub mod fs;
