// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render command implementation.
//!
//! Prints a generated document to stdout without touching the build tree.
//!
//! ```text
//! mods-toml    --> manifest::generate --> TOML | JSON document
//! jar-manifest --> archive::build_attributes --> MANIFEST.MF | [{name, value}]
//! ci-output    --> CiOutputRecord --> key=value lines | {key: value}
//! pom          --> publish::render_pom --> XML
//! ```

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::archive::{build_attributes, render_manifest_mf};
use crate::ci::CiOutputRecord;
use crate::cli::render::{RenderArgs, RenderTarget};
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::manifest;
use crate::publish::render_pom;

#[derive(Serialize)]
struct Attribute<'a> {
    name: &'a str,
    value: &'a str,
}

/// Renders the document selected by `args`.
///
/// # Errors
///
/// Returns an error if a required field is missing, the CI record is
/// invalid, or JSON output is requested for the POM.
pub fn render_document(
    config: &ProjectConfig,
    args: &RenderArgs,
    timestamp: DateTime<FixedOffset>,
) -> Result<String> {
    match args.target {
        RenderTarget::ModsToml => {
            let document = manifest::generate(config)?;
            if args.json {
                Ok(serde_json::to_string_pretty(&document)?)
            } else {
                Ok(manifest::render(&document)?)
            }
        }
        RenderTarget::JarManifest => {
            let attributes = build_attributes(config, args.classifier, timestamp);
            if args.json {
                let list: Vec<Attribute<'_>> = attributes
                    .iter()
                    .map(|(name, value)| Attribute { name, value })
                    .collect();
                Ok(serde_json::to_string_pretty(&list)?)
            } else {
                Ok(render_manifest_mf(&attributes))
            }
        }
        RenderTarget::CiOutput => {
            let record = CiOutputRecord::from_config(config);
            record.validate()?;
            if args.json {
                let object: serde_json::Map<String, serde_json::Value> = record
                    .entries()
                    .map(|(key, value)| (key.to_string(), value.into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&object)?)
            } else {
                Ok(record.render())
            }
        }
        RenderTarget::Pom => {
            if args.json {
                anyhow::bail!("the POM has no JSON form, drop --json");
            }
            Ok(render_pom(config)?)
        }
    }
}

/// Main handler for the render command.
///
/// # Errors
///
/// See [`render_document`].
pub fn run_render_command(args: &RenderArgs, config: &ProjectConfig) -> Result<()> {
    let timestamp = chrono::Local::now().fixed_offset();
    let output = render_document(config, args, timestamp)?;

    tracing::debug!(document = ?args.target, json = args.json, "Rendered document");
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests;
