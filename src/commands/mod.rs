// Command handlers module
pub mod monitor;

use clap::{Arg, Command};
use std::path::PathBuf;

// Re-exports for cleaner imports
pub use monitor::execute as monitor;

/// Command line definition for the `treetop` binary
pub fn build_cli() -> Command {
    Command::new("treetop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A 'top' like text/log file monitor")
        .arg(
            Arg::new("config")
                .help("Watch list: one file path per line, '#' starts a comment")
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .value_name("SECS")
                .help("Auto-update display every SECS seconds [default: 10]")
                .value_parser(clap::value_parser!(u64)),
        )
}
