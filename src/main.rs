use clap::Parser;

mod cli;
mod commands;
mod init;
mod logger;

use cli::{Cli, SubCommand};
use init::initialize_app;

fn main() -> () {
    let opts: Cli = Cli::parse();

    let config = match initialize_app(opts.log_level) {
        Ok(config) => config,
        Err(error) => {
            log::error!("{error}");
            std::process::exit(1);
        },
    };

    let result = match opts.subcmd {
        SubCommand::Inspect(cmd) => cmd.execute(&config),
        SubCommand::Render(cmd) => cmd.execute(&config),
        SubCommand::Face(cmd) => cmd.execute(&config),
        SubCommand::DecodeFace(cmd) => cmd.execute(),
    };
    if let Err(error) = result {
        log::error!("{error:#}");
        std::process::exit(1);
    };
}
