//! Top level subcommands

pub(crate) mod command;
pub(crate) mod header;
pub(crate) mod json;
pub(crate) mod show;
