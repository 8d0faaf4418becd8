use crate::config::{Config, ConfigError};
use lexopt::prelude::*;
use std::ffi::OsString;
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: gridsnake [OPTIONS]

Options:
  -c, --config <PATH>    Read configuration from PATH
      --seed <N>         Seed food placement with N
      --log-file <PATH>  Write the log to PATH
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit
";

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) seed: Option<u64>,
    pub(crate) log_file: Option<PathBuf>,
}

impl Invocation {
    pub(crate) fn from_env() -> Result<Invocation, lexopt::Error> {
        Invocation::from_args(std::env::args_os().skip(1))
    }

    /// Parse the given arguments, not including the program name
    pub(crate) fn from_args<I>(args: I) -> Result<Invocation, lexopt::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut parser = lexopt::Parser::from_args(args);
        let mut arguments = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    arguments.config = Some(PathBuf::from(parser.value()?));
                }
                Long("seed") => arguments.seed = Some(parser.value()?.parse()?),
                Long("log-file") => {
                    arguments.log_file = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => return Ok(Invocation::Help),
                Short('V') | Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(arguments))
    }
}

impl Arguments {
    /// Load the configuration file named on the command line, or the default
    /// one if none was given, and apply command-line overrides.  Only the
    /// default file may be missing.
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::load(&Config::default_path()?, true)?,
        };
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(ref path) = self.log_file {
            config.log.file = Some(path.clone());
        }
        Ok(config)
    }
}
