// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core::fmt;

/// A length-prefixed ASCII byte sequence. The length is that of the slice; no terminator byte
/// is stored or looked for.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityField {
    bytes: &'static [u8],
}

impl IdentityField {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The bytes as text. Generated fields are printable ASCII, so this is `Some` for them.
    pub fn as_str(&self) -> Option<&'static str> {
        std::str::from_utf8(self.bytes).ok()
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes.escape_ascii())
    }
}

impl fmt::Debug for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.bytes.escape_ascii())
    }
}

impl serde::Serialize for IdentityField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
