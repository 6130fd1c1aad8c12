// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers for generated outputs.
//!
//! ```text
//! write: write_atomic()      temp file in target dir --> persist (rename)
//!        append_text()       create-or-append, UTF-8
//! copy:  copy_file_async()   tokio::fs copy, parent dirs created
//!        remove_if_exists()  file or directory, missing is fine
//! ```

pub mod copy;
pub mod write;
