// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;
use build_identity::{BUILD_IDENTITY, BuildIdentity, build_info};
use clap::{ArgMatches, Command};

use super::command::{CommandDefinition, get, verbose_arg};

pub struct ShowCommandDefinition {}

impl CommandDefinition for ShowCommandDefinition {
    fn command(&self) -> Command {
        Command::new("show")
            .about("Print the version, build number and build date")
            .arg(verbose_arg())
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let verbose: bool = get(matches, "verbose").unwrap_or(false);

        BUILD_IDENTITY.log();
        println!("{}", render(&BUILD_IDENTITY, verbose));

        Ok(())
    }
}

fn render(identity: &BuildIdentity, verbose: bool) -> String {
    if verbose {
        format!(
            "{identity}\nbuilt with {}",
            build_info::toolchain_summary()
        )
    } else {
        identity.to_string()
    }
}
