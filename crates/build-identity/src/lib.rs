// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Build identity (version, build number, build date) compiled into the binary.
//!
//! The values are produced by `build.rs` from `build-identity.toml` and the `BUILD_IDENTITY_*`
//! environment variables. Each one is a byte sequence with an explicit length. Reading them never
//! fails and involves no parsing.

pub mod build_info;
mod field;
mod identity;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/generated.rs"));
}

pub use field::IdentityField;
pub use identity::BuildIdentity;

pub const VERSION: IdentityField = IdentityField::new(&generated::VERSION);
pub const VERSION_LEN: usize = generated::VERSION_LEN;

pub const BUILD_NO: IdentityField = IdentityField::new(&generated::BUILD_NO);
pub const BUILD_NO_LEN: usize = generated::BUILD_NO_LEN;

pub const BUILD_DATE: IdentityField = IdentityField::new(&generated::BUILD_DATE);
pub const BUILD_DATE_LEN: usize = generated::BUILD_DATE_LEN;

// A length that disagrees with its bytes is a generator bug; refuse to compile it.
const _: () = {
    assert!(VERSION.len() == VERSION_LEN);
    assert!(BUILD_NO.len() == BUILD_NO_LEN);
    assert!(BUILD_DATE.len() == BUILD_DATE_LEN);
};

pub const BUILD_IDENTITY: BuildIdentity = BuildIdentity {
    version: VERSION,
    build_number: BUILD_NO,
    build_date: BUILD_DATE,
};

/// C header declaring the same values as `unsigned char` arrays with `unsigned int` lengths.
pub fn c_header() -> &'static str {
    include_str!(concat!(env!("OUT_DIR"), "/version.h"))
}
