use dotted_quad::cmd::{run_and_print, CommandLine};
use dotted_quad::config::{init_logging, Config};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse_args();
    let config = Config::from_env();
    init_logging(&config)?;
    if config.no_color {
        colored::control::set_override(false);
    }
    log::debug!("#Start main()");

    if !run_and_print(&commands.command) {
        std::process::exit(1);
    }
    Ok(())
}
