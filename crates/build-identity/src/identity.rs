// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core::fmt;

use crate::IdentityField;

/// Version, build number and build date of this build, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BuildIdentity {
    /// Version string, e.g. `0.8`.
    pub version: IdentityField,
    /// Build number, e.g. `314`.
    pub build_number: IdentityField,
    /// Build date in `DD-Mon-YYYY` form, e.g. `24-Jan-2020`.
    pub build_date: IdentityField,
}

impl BuildIdentity {
    /// Emits the identity as a single `info` event.
    pub fn log(&self) {
        tracing::info!(
            version = %self.version,
            build_number = %self.build_number,
            build_date = %self.build_date,
            "Build identity"
        );
    }
}

impl fmt::Display for BuildIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{version} build {build_number} ({build_date})",
            version = self.version,
            build_number = self.build_number,
            build_date = self.build_date,
        )
    }
}
