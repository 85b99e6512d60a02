//! Console for the proxy server daemon.

use color_eyre::Result;
use tunnelview::app::ConsoleKind;
use tunnelview::cli::{parse_args, CliCommand, USAGE};
use tunnelview::config::DEFAULT_SERVER_ORIGIN;
use tunnelview::bootstrap;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args(), DEFAULT_SERVER_ORIGIN) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => {
            println!("tunnelview-server {VERSION}");
            Ok(())
        }
        CliCommand::Help => {
            println!("{USAGE}");
            Ok(())
        }
        CliCommand::Run(config) => bootstrap::run_console(ConsoleKind::Server, config).await,
    }
}
