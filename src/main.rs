//! plowins binary entry point

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use plowins::cli::{Cli, Commands, ConfigCommands};
use plowins::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    match &cli.command {
        Commands::Scan(args) => {
            let config = Config::load()?;
            commands::scan::handle(args, &config)
        }
        Commands::Shapes => commands::shapes::handle(),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Init { force }) => commands::config::handle_init(*force),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
