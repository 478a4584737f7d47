// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use identity_env::EnvError;
use thiserror::Error;

use crate::Field;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("No value for {field}. Set `{}` or add it to the manifest", .field.env_key())]
    Missing { field: Field },

    #[error("The {field} value is empty")]
    Empty { field: Field },

    #[error("The {field} value has a non-printable or non-ASCII byte 0x{byte:02x} at position {position}")]
    NonAscii {
        field: Field,
        byte: u8,
        position: usize,
    },

    #[error("SOURCE_DATE_EPOCH value {0} is out of range")]
    EpochOutOfRange(i64),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("Could not parse manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
