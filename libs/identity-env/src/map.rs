// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::Environment;
use std::collections::HashMap;

/// In-memory environment, mostly for tests.
#[derive(Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        Self {
            values: HashMap::from_iter(
                values
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let env = MapEnvironment::from([
            ("BUILD_IDENTITY_VERSION", "0.8"),
            ("BUILD_IDENTITY_BUILD_NO", "314"),
        ]);

        assert_eq!(env.get("BUILD_IDENTITY_VERSION").as_deref(), Some("0.8"));
        assert_eq!(env.get("BUILD_IDENTITY_BUILD_NO").as_deref(), Some("314"));
        assert_eq!(env.get("BUILD_IDENTITY_BUILD_DATE"), None);
    }
}
