//! mm-inactive - find and deactivate inactive Mattermost team members

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod logging;
mod models;
mod output;
mod sweep;

use cli::{Cli, CommandContext};
use error::{ConfigError, Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(err) = run(&cli).await {
        match &err {
            Error::Config(ConfigError::Incomplete(problems)) => {
                for problem in problems {
                    log::error!("{}", problem);
                }
            }
            _ => log::error!("{}", err),
        }
        if matches!(err, Error::Config(_)) {
            eprintln!("Run 'mm-inactive --help' for usage.");
        }
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::new(cli)?;
    let outcome = cli::prune::execute(&ctx).await?;
    log::debug!("Run finished: {:?}", outcome);
    Ok(())
}
