//! Command-line argument parsing.
//!
//! Hand-rolled flag matching; the surface is small enough that a parser
//! dependency would outweigh it. Parsing is pure (no prompting, no env
//! reads) so it stays unit-testable; side effects like the password prompt
//! happen at bootstrap.

use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::error::ConfigError;
use crate::theme::{Locale, Mode};

/// What the binary should do after parsing.
#[derive(Debug, Clone)]
pub enum CliCommand {
    /// Start the console with this configuration.
    Run(ConsoleConfig),
    /// Print the version and exit.
    Version,
    /// Print usage and exit.
    Help,
}

/// Usage text shared by both console binaries.
pub const USAGE: &str = "\
USAGE:
    tunnelview-client [OPTIONS]
    tunnelview-server [OPTIONS]

OPTIONS:
    --api <origin>        Backend admin origin (default: the daemon's local
                          admin port)
    --user <name>         Basic-auth user for the admin API
    --password-stdin      Prompt for the basic-auth password before starting
    --interval <secs>     Auto-refresh period (default: 10)
    --theme <light|dark>  Skip the color-scheme probe and force a mode
    --locale <zh|en>      Menu/label language (default: zh)
    --dev-proxy <addr>    Run the development forwarding layer on this
                          address (requires the dev-proxy build feature)
    -V, --version         Print version
    -h, --help            Print this help
";

/// Parse command-line arguments against a default backend origin.
pub fn parse_args<I>(args: I, default_origin: &str) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut config = ConsoleConfig::new(default_origin);
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--api" => config.api_origin = value_for(&arg, args.next())?,
            "--user" => config.user = Some(value_for(&arg, args.next())?),
            "--password-stdin" => config.prompt_password = true,
            "--interval" => {
                let raw = value_for(&arg, args.next())?;
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    flag: arg.clone(),
                    value: raw.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        flag: arg,
                        value: raw,
                    });
                }
                config.refresh_interval = Duration::from_secs(secs);
            }
            "--theme" => {
                let raw = value_for(&arg, args.next())?;
                let mode = match raw.as_str() {
                    "light" => Some(Mode::Light),
                    "dark" => Some(Mode::Dark),
                    _ => None,
                };
                config.theme_override = Some(mode.ok_or(ConfigError::InvalidValue {
                    flag: arg,
                    value: raw,
                })?);
            }
            "--locale" => {
                let raw = value_for(&arg, args.next())?;
                config.locale = Locale::parse(&raw).ok_or(ConfigError::InvalidValue {
                    flag: arg,
                    value: raw,
                })?;
            }
            #[cfg(feature = "dev-proxy")]
            "--dev-proxy" => {
                let raw = value_for(&arg, args.next())?;
                let addr = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    flag: arg,
                    value: raw,
                })?;
                config.dev_proxy = Some(addr);
            }
            other => {
                return Err(ConfigError::UnknownFlag {
                    flag: other.to_string(),
                })
            }
        }
    }
    Ok(CliCommand::Run(config))
}

fn value_for(flag: &str, next: Option<String>) -> Result<String, ConfigError> {
    next.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}
