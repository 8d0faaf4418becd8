mod app;
mod arguments;
mod command;
mod config;
mod consts;
mod engine;
mod game;
mod util;
use crate::app::App;
use crate::arguments::{Arguments, Invocation, USAGE};
use crate::config::Config;
use crate::engine::Engine;
use crate::game::GameSession;
use anyhow::Context;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Invocation::from_env() {
        Ok(Invocation::Run(args)) => match run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => error_exit(&e),
        },
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprint!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Arguments) -> anyhow::Result<()> {
    let config = args
        .load_config()
        .context("failed to load configuration")?;
    let log_error = init_logging(&config).err();
    info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    info!("Game settings: {:?}", config.game);
    let rng = config
        .game
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let session = GameSession::new(config.game, rng);
    let engine = Engine::start(session, config.game.tick_period())
        .context("failed to start tick thread")?;
    let terminal = ratatui::init();
    let r = App::new(engine).run(terminal);
    ratatui::restore();
    if let Some(e) = log_error {
        eprintln!("gridsnake: logging disabled: {e:#}");
    }
    r.context("terminal I/O failed")
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    if config.log.level == LevelFilter::Off {
        return Ok(());
    }
    let path = config
        .log_file()
        .context("could not determine log file location")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(&path)?;
    WriteLogger::init(config.log.level, simplelog::Config::default(), file)?;
    Ok(())
}

fn error_exit(e: &anyhow::Error) -> ExitCode {
    if e
        .downcast_ref::<io::Error>()
        .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    {
        return ExitCode::SUCCESS;
    }
    eprintln!("gridsnake: {e:#}");
    ExitCode::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;
    use std::io::Write;

    #[test]
    fn unusable_log_path_is_an_error() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmpfile, "not a directory").unwrap();
        let config = Config {
            log: LogConfig {
                file: Some(tmpfile.path().join("gridsnake.log")),
                level: LevelFilter::Debug,
            },
            ..Config::default()
        };
        assert!(init_logging(&config).is_err());
    }

    #[test]
    fn logging_off_skips_the_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("sub").join("gridsnake.log");
        let config = Config {
            log: LogConfig {
                file: Some(path.clone()),
                level: LevelFilter::Off,
            },
            ..Config::default()
        };
        assert!(init_logging(&config).is_ok());
        assert!(!path.exists());
    }
}
