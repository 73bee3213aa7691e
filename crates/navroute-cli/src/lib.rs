//! navroute CLI library.
//!
//! Output formatting shared by the `navroute` binary's subcommands.

pub mod output;
