use anyhow::Result;

use treetop::commands::{self, build_cli};

fn main() -> Result<()> {
    treetop::init_logging();

    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Help, version and usage errors all exit with status 0,
            // even when stdout/stderr is already gone
            e.print().ok();
            std::process::exit(0);
        }
    };

    commands::monitor(&matches)
}
