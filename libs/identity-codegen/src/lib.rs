// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Build-time generator for the build identity table.
//!
//! Resolves the version, build number and build date (see [`IdentityValues::resolve`]), checks
//! that each can be stored as a length-prefixed ASCII byte sequence, and renders them as Rust
//! and C sources.

use std::path::{Path, PathBuf};

mod error;
mod manifest;
mod render;
mod values;

pub use error::CodegenError;
pub use manifest::{IdentityManifest, MANIFEST_FILE_NAME};
pub use render::{render_c_header, render_rust};
pub use values::{BUILD_DATE_FORMAT, Field, IdentityValues, SOURCE_DATE_EPOCH};

pub const GENERATED_RUST_FILE: &str = "generated.rs";
pub const GENERATED_C_HEADER_FILE: &str = "version.h";

/// Validates `values` and writes both generated sources into `out_dir`.
pub fn generate(out_dir: &Path, values: &IdentityValues) -> Result<(), CodegenError> {
    values.validate()?;

    write_generated(out_dir, GENERATED_RUST_FILE, &render_rust(values))?;
    write_generated(out_dir, GENERATED_C_HEADER_FILE, &render_c_header(values))?;

    Ok(())
}

pub fn write_generated(
    out_dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, CodegenError> {
    let path = out_dir.join(file_name);
    std::fs::write(&path, contents).map_err(|source| CodegenError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}
