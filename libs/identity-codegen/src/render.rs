// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Source renderers for the identity table. Both emit each field as a byte array plus an
//! explicit length, never as a NUL-terminated string.

use std::fmt::Write;

use crate::{Field, IdentityValues};

const BYTES_PER_LINE: usize = 12;

/// Renders the module included by the `build-identity` crate.
pub fn render_rust(values: &IdentityValues) -> String {
    let mut out = String::from("// @generated by identity-codegen\n");

    for field in Field::ALL {
        let bytes = values.get(field).as_bytes();
        let name = field.rust_const();

        out.push('\n');
        let _ = writeln!(out, "pub(crate) const {name}: [u8; {}] = [", bytes.len());
        for line in hex_lines(bytes, "    ") {
            out.push_str(&line);
            out.push_str(",\n");
        }
        out.push_str("];\n");
        let _ = writeln!(out, "pub(crate) const {name}_LEN: usize = {};", bytes.len());
    }

    out
}

/// Renders a C header with `unsigned char Name[]` arrays and `unsigned int Name_len` lengths.
pub fn render_c_header(values: &IdentityValues) -> String {
    let mut out = String::from("#ifndef __VERSION_H__\n#define __VERSION_H__\n\n");

    for field in Field::ALL {
        let bytes = values.get(field).as_bytes();
        let name = field.c_symbol();

        let _ = writeln!(out, "unsigned char {name}[] = {{");
        out.push_str(&hex_lines(bytes, "  ").join(",\n"));
        out.push_str("\n};\n");
        let _ = writeln!(out, "unsigned int {name}_len = {};", bytes.len());
    }

    out.push_str("\n#endif\n");
    out
}

fn hex_lines(bytes: &[u8], indent: &str) -> Vec<String> {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let hex: Vec<String> = chunk.iter().map(|byte| format!("0x{byte:02x}")).collect();
            format!("{indent}{}", hex.join(", "))
        })
        .collect()
}
