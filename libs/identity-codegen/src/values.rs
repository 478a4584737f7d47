// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use chrono::{DateTime, Datelike};
use identity_env::{Environment, parse_value};

use crate::{CodegenError, IdentityManifest};

/// Reproducible-builds timestamp (seconds since the Unix epoch).
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// `DD-Mon-YYYY`, e.g. `24-Jan-2020`.
pub const BUILD_DATE_FORMAT: &str = "%d-%b-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Version,
    BuildNumber,
    BuildDate,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Version, Field::BuildNumber, Field::BuildDate];

    pub fn env_key(&self) -> &'static str {
        match self {
            Field::Version => "BUILD_IDENTITY_VERSION",
            Field::BuildNumber => "BUILD_IDENTITY_BUILD_NO",
            Field::BuildDate => "BUILD_IDENTITY_BUILD_DATE",
        }
    }

    /// Name of the Rust constant holding the bytes. The length constant appends `_LEN`.
    pub fn rust_const(&self) -> &'static str {
        match self {
            Field::Version => "VERSION",
            Field::BuildNumber => "BUILD_NO",
            Field::BuildDate => "BUILD_DATE",
        }
    }

    /// Name of the C array. The length variable appends `_len`.
    pub fn c_symbol(&self) -> &'static str {
        match self {
            Field::Version => "Version",
            Field::BuildNumber => "BuildNo",
            Field::BuildDate => "BuildDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Version => "version",
            Field::BuildNumber => "build_number",
            Field::BuildDate => "build_date",
        };
        f.write_str(name)
    }
}

/// The three values that end up in the compiled table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityValues {
    pub version: String,
    pub build_number: String,
    pub build_date: String,
}

impl IdentityValues {
    /// Resolves each field from, in order: the environment, the manifest, and a field-specific
    /// fallback (`SOURCE_DATE_EPOCH` for the date, the package version for the version).
    pub fn resolve(
        env: &dyn Environment,
        manifest: Option<&IdentityManifest>,
        pkg_version: Option<&str>,
    ) -> Result<IdentityValues, CodegenError> {
        let from_manifest = |field: Field| {
            manifest
                .and_then(|m| m.get(field))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let lookup = |field: Field| env.get_non_empty(field.env_key()).or_else(|| from_manifest(field));

        let version = lookup(Field::Version).or_else(|| pkg_version.map(str::to_string));
        let build_number = lookup(Field::BuildNumber);
        let build_date = match lookup(Field::BuildDate) {
            Some(date) => Some(date),
            None => date_from_epoch(env)?,
        };

        let values = IdentityValues {
            version: version.ok_or(CodegenError::Missing {
                field: Field::Version,
            })?,
            build_number: build_number.ok_or(CodegenError::Missing {
                field: Field::BuildNumber,
            })?,
            build_date: build_date.ok_or(CodegenError::Missing {
                field: Field::BuildDate,
            })?,
        };

        tracing::debug!(
            version = %values.version,
            build_number = %values.build_number,
            build_date = %values.build_date,
            "Resolved build identity"
        );

        Ok(values)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Version => &self.version,
            Field::BuildNumber => &self.build_number,
            Field::BuildDate => &self.build_date,
        }
    }

    /// Checks that every value can be carried as a length-prefixed ASCII sequence: non-empty and
    /// made of printable ASCII only (which also rules out an embedded NUL).
    pub fn validate(&self) -> Result<(), CodegenError> {
        for field in Field::ALL {
            let value = self.get(field);

            if value.is_empty() {
                return Err(CodegenError::Empty { field });
            }

            if let Some((position, &byte)) = value
                .as_bytes()
                .iter()
                .enumerate()
                .find(|(_, byte)| !(0x20..=0x7e).contains(*byte))
            {
                return Err(CodegenError::NonAscii {
                    field,
                    byte,
                    position,
                });
            }
        }

        Ok(())
    }
}

fn date_from_epoch(env: &dyn Environment) -> Result<Option<String>, CodegenError> {
    let Some(epoch) = parse_value::<i64, _>(env, SOURCE_DATE_EPOCH)? else {
        return Ok(None);
    };

    let timestamp =
        DateTime::from_timestamp(epoch, 0).ok_or(CodegenError::EpochOutOfRange(epoch))?;

    // `%Y` only stays four digits (and unsigned) within this range
    if !(0..=9999).contains(&timestamp.year()) {
        return Err(CodegenError::EpochOutOfRange(epoch));
    }

    Ok(Some(timestamp.format(BUILD_DATE_FORMAT).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity_env::MapEnvironment;
    use test_log::test;

    fn observed() -> IdentityValues {
        IdentityValues {
            version: "0.8".to_string(),
            build_number: "314".to_string(),
            build_date: "24-Jan-2020".to_string(),
        }
    }

    #[test]
    fn resolve_from_environment() {
        let env = MapEnvironment::from([
            ("BUILD_IDENTITY_VERSION", "0.8"),
            ("BUILD_IDENTITY_BUILD_NO", "314"),
            ("BUILD_IDENTITY_BUILD_DATE", "24-Jan-2020"),
        ]);

        let values = IdentityValues::resolve(&env, None, Some("9.9.9")).unwrap();
        assert_eq!(values, observed());
    }

    #[test]
    fn environment_overrides_manifest() {
        let manifest = IdentityManifest::parse(
            r#"
            [identity]
            version = "0.8"
            build_number = "314"
            build_date = "24-Jan-2020"
            "#,
        )
        .unwrap();
        let env = MapEnvironment::from([("BUILD_IDENTITY_BUILD_NO", "315")]);

        let values = IdentityValues::resolve(&env, Some(&manifest), None).unwrap();
        assert_eq!(values.version, "0.8");
        assert_eq!(values.build_number, "315");
        assert_eq!(values.build_date, "24-Jan-2020");
    }

    #[test]
    fn blank_environment_value_falls_through() {
        let manifest = IdentityManifest::parse(
            r#"
            [identity]
            build_number = "314"
            build_date = "24-Jan-2020"
            "#,
        )
        .unwrap();
        let env = MapEnvironment::from([("BUILD_IDENTITY_BUILD_NO", "")]);

        let values = IdentityValues::resolve(&env, Some(&manifest), Some("0.8.0")).unwrap();
        assert_eq!(values.build_number, "314");
        assert_eq!(values.version, "0.8.0");
    }

    #[test]
    fn date_from_source_date_epoch() {
        let env = MapEnvironment::from([
            ("BUILD_IDENTITY_BUILD_NO", "314"),
            ("SOURCE_DATE_EPOCH", "1579824000"),
        ]);

        let values = IdentityValues::resolve(&env, None, Some("0.8")).unwrap();
        assert_eq!(values, observed());
    }

    #[test]
    fn manifest_beats_fallbacks() {
        let manifest = IdentityManifest::parse(
            r#"
            [identity]
            version = "0.8"
            build_number = "314"
            build_date = "24-Jan-2020"
            "#,
        )
        .unwrap();
        let env = MapEnvironment::from([("SOURCE_DATE_EPOCH", "1700000000")]);

        let values = IdentityValues::resolve(&env, Some(&manifest), Some("9.9.9")).unwrap();
        assert_eq!(values, observed());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let manifest = IdentityManifest::parse(
            r#"
            [identity]
            build_date = "  24-Jan-2020 "
            "#,
        )
        .unwrap();
        let env = MapEnvironment::from([
            ("BUILD_IDENTITY_VERSION", " 0.8 "),
            ("BUILD_IDENTITY_BUILD_NO", "314\t"),
        ]);

        let values = IdentityValues::resolve(&env, Some(&manifest), None).unwrap();
        assert_eq!(values, observed());
        values.validate().unwrap();
    }

    #[test]
    fn source_date_epoch_out_of_range() {
        for epoch in ["300000000000", "-62167219201", i64::MAX.to_string().as_str()] {
            let env = MapEnvironment::from([
                ("BUILD_IDENTITY_BUILD_NO", "314"),
                ("SOURCE_DATE_EPOCH", epoch),
            ]);

            let err = IdentityValues::resolve(&env, None, Some("0.8")).unwrap_err();
            assert!(
                matches!(err, CodegenError::EpochOutOfRange(value) if value.to_string() == epoch),
                "{epoch}: {err:?}"
            );
        }
    }

    #[test]
    fn source_date_epoch_last_four_digit_year() {
        // 9999-12-31T00:00:00Z
        let env = MapEnvironment::from([
            ("BUILD_IDENTITY_BUILD_NO", "314"),
            ("SOURCE_DATE_EPOCH", "253402214400"),
        ]);

        let values = IdentityValues::resolve(&env, None, Some("0.8")).unwrap();
        assert_eq!(values.build_date, "31-Dec-9999");
    }

    #[test]
    fn invalid_source_date_epoch() {
        let env = MapEnvironment::from([
            ("BUILD_IDENTITY_BUILD_NO", "314"),
            ("SOURCE_DATE_EPOCH", "last tuesday"),
        ]);

        let err = IdentityValues::resolve(&env, None, Some("0.8")).unwrap_err();
        assert!(matches!(err, CodegenError::Env(_)), "{err:?}");
    }

    #[test]
    fn missing_build_number() {
        let env = MapEnvironment::from([("BUILD_IDENTITY_BUILD_DATE", "24-Jan-2020")]);

        let err = IdentityValues::resolve(&env, None, Some("0.8")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No value for build_number. Set `BUILD_IDENTITY_BUILD_NO` or add it to the manifest"
        );
    }

    #[test]
    fn validate_accepts_observed_values() {
        observed().validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty() {
        let values = IdentityValues {
            version: String::new(),
            ..observed()
        };

        assert!(matches!(
            values.validate(),
            Err(CodegenError::Empty {
                field: Field::Version
            })
        ));
    }

    #[test]
    fn validate_rejects_terminator_and_non_ascii() {
        let with_nul = IdentityValues {
            build_number: "31\u{0}4".to_string(),
            ..observed()
        };
        assert!(matches!(
            with_nul.validate(),
            Err(CodegenError::NonAscii {
                field: Field::BuildNumber,
                byte: 0,
                position: 2
            })
        ));

        let with_umlaut = IdentityValues {
            build_date: "24-Jän-2020".to_string(),
            ..observed()
        };
        let err = with_umlaut.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The build_date value has a non-printable or non-ASCII byte 0xc3 at position 4"
        );
    }
}
