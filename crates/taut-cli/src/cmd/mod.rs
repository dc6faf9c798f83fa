//! Command handlers. Each module owns one subcommand's args and run
//! function; all of them report through [`crate::output`].

pub mod compute;
pub mod demo;
pub mod import;
