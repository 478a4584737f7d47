// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::{CodegenError, Field};

pub const MANIFEST_FILE_NAME: &str = "build-identity.toml";

/// Contents of `build-identity.toml`. Every entry is optional; missing ones are resolved from
/// other sources.
///
/// ```toml
/// [identity]
/// version = "0.8"
/// build_number = "314"
/// build_date = "24-Jan-2020"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IdentityManifest {
    #[serde(default)]
    identity: IdentitySection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct IdentitySection {
    version: Option<String>,
    build_number: Option<String>,
    build_date: Option<String>,
}

impl IdentityManifest {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the manifest at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Option<Self>, CodegenError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No identity manifest at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(CodegenError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(&content)
            .map(Some)
            .map_err(|source| CodegenError::Manifest {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Version => &self.identity.version,
            Field::BuildNumber => &self.identity.build_number,
            Field::BuildDate => &self.identity.build_date,
        };
        value.as_deref()
    }
}
