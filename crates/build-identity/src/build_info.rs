// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Toolchain facts recorded by `built` when this crate was compiled. Informational only; these
//! are not part of [`crate::BuildIdentity`].

mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub fn rustc_version() -> &'static str {
    built_info::RUSTC_VERSION
}

pub fn target() -> &'static str {
    built_info::TARGET
}

/// `debug` or `release`.
pub fn profile() -> &'static str {
    built_info::PROFILE
}

/// Cargo package version of the `build-identity` crate.
pub fn pkg_version() -> &'static str {
    built_info::PKG_VERSION
}

pub fn toolchain_summary() -> String {
    format!("{}, {} ({})", rustc_version(), target(), profile())
}
