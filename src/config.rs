use crate::render::Style;
use thiserror::Error;

pub const USAGE: &str = "usage: life_check [--quiet] [--color] [--sized] [--show-successor] [--report FILE]";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Options for a single check, taken from the command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Skip the input prompts.
    pub quiet: bool,
    /// How grids are echoed.
    pub style: Style,
    /// Each grid starts with a `<rows> <cols>` header instead of ending at a blank line.
    pub sized: bool,
    /// Print the computed successor when the target does not match.
    pub show_successor: bool,
    /// Where to write the JSON report, if anywhere.
    pub report: Option<String>,
    /// Print usage and exit.
    pub help: bool,
}

impl Config {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-q" | "--quiet" => config.quiet = true,
                "--color" => config.style = Style::Color,
                "--sized" => config.sized = true,
                "--show-successor" => config.show_successor = true,
                "--report" => {
                    let path = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                    config.report = Some(path);
                }
                "-h" | "--help" => config.help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }
}
