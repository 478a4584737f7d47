// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;

use commands::{
    command::{CommandDefinition, SubcommandDefinition},
    header::HeaderCommandDefinition,
    json::JsonCommandDefinition,
    show::ShowCommandDefinition,
};

mod commands;
mod logging_tracing;

fn main() -> Result<()> {
    logging_tracing::init();

    let subcommand_definition = subcommand_definition();

    let command = subcommand_definition
        .command()
        .version(
            build_identity::VERSION
                .as_str()
                .unwrap_or(env!("CARGO_PKG_VERSION")),
        );

    let matches = command.get_matches();

    subcommand_definition.execute(&matches)
}

fn subcommand_definition() -> SubcommandDefinition {
    SubcommandDefinition::new(
        "identity",
        "Print the build identity compiled into this binary",
        vec![
            Box::new(ShowCommandDefinition {}),
            Box::new(JsonCommandDefinition {}),
            Box::new(HeaderCommandDefinition {}),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        subcommand_definition().command().debug_assert();
    }

    #[test]
    fn subcommand_is_required() {
        let result = subcommand_definition()
            .command()
            .try_get_matches_from(["identity"]);

        assert!(result.is_err());
    }
}
