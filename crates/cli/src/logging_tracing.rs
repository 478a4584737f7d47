// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Console logging setup.
//!
//! Calling [`init`] installs a global tracing subscriber filtered by the `BUILD_IDENTITY_LOG`
//! environment variable, which follows the same conventions as `RUST_LOG`. Without it only
//! warnings and errors are shown.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

const BUILD_IDENTITY_LOG: &str = "BUILD_IDENTITY_LOG";

pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(BUILD_IDENTITY_LOG)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
