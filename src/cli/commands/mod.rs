//! One module per `passvault` subcommand.

pub mod add;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod list;
pub mod show;
