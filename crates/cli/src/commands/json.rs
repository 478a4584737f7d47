// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;
use build_identity::BUILD_IDENTITY;
use clap::{ArgMatches, Command};

use super::command::CommandDefinition;

pub struct JsonCommandDefinition {}

impl CommandDefinition for JsonCommandDefinition {
    fn command(&self) -> Command {
        Command::new("json").about("Print the build identity as JSON")
    }

    fn execute(&self, _matches: &ArgMatches) -> Result<()> {
        BUILD_IDENTITY.log();
        println!("{}", serde_json::to_string_pretty(&BUILD_IDENTITY)?);

        Ok(())
    }
}
