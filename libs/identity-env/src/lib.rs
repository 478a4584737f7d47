// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Lookup of generator inputs from the process environment (or a stand-in for it in tests).

use std::str::FromStr;

mod map;

pub use map::MapEnvironment;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Like [`Environment::get`], but trimmed, and with a blank value treated as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// Parses the value of `key`, if set.
pub fn parse_value<T: FromStr, E: Environment + ?Sized>(
    env: &E,
    key: &str,
) -> Result<Option<T>, EnvError> {
    match env.get_non_empty(key) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| EnvError::InvalidValue {
                key: key.to_string(),
                value,
                expected: std::any::type_name::<T>(),
            }),
        None => Ok(None),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {value}. Expected a value of type {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
