// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::env;
use std::path::PathBuf;

use identity_codegen::{
    Field, IdentityManifest, IdentityValues, MANIFEST_FILE_NAME, SOURCE_DATE_EPOCH,
};
use identity_env::SystemEnvironment;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // toolchain facts for crate::build_info
    built::write_built_file()?;

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_path = manifest_dir.join(MANIFEST_FILE_NAME);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", manifest_path.display());
    for field in Field::ALL {
        println!("cargo:rerun-if-env-changed={}", field.env_key());
    }
    println!("cargo:rerun-if-env-changed={SOURCE_DATE_EPOCH}");

    let manifest = IdentityManifest::load(&manifest_path)?;
    let pkg_version = env::var("CARGO_PKG_VERSION").ok();

    let values = IdentityValues::resolve(
        &SystemEnvironment,
        manifest.as_ref(),
        pkg_version.as_deref(),
    )?;

    identity_codegen::generate(&out_dir, &values)?;

    Ok(())
}
