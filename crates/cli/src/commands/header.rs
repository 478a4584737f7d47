// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use build_identity::BUILD_IDENTITY;
use clap::{ArgMatches, Command};

use super::command::{CommandDefinition, get, output_arg};

pub struct HeaderCommandDefinition {}

impl CommandDefinition for HeaderCommandDefinition {
    fn command(&self) -> Command {
        Command::new("header")
            .about("Print a C header declaring the build identity")
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let output: Option<PathBuf> = get(matches, "output");

        BUILD_IDENTITY.log();

        match output {
            Some(path) => write_header(&path),
            None => {
                print!("{}", build_identity::c_header());
                Ok(())
            }
        }
    }
}

fn write_header(path: &Path) -> Result<()> {
    std::fs::write(path, build_identity::c_header())
        .with_context(|| format!("Could not write header to {}", path.display()))?;

    tracing::info!("Wrote C header to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.h");

        let command = HeaderCommandDefinition {};
        let matches = command
            .command()
            .try_get_matches_from(["header", "-o", path.to_str().unwrap()])
            .unwrap();
        command.execute(&matches).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, build_identity::c_header());
        assert!(written.contains("unsigned int BuildNo_len = 3;"));
    }

    #[test]
    fn unwritable_output() {
        let dir = tempfile::tempdir().unwrap();

        let err = write_header(&dir.path().join("missing").join("version.h")).unwrap_err();
        assert!(err.to_string().starts_with("Could not write header to "));
    }
}
