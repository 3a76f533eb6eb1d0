use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// `env_logger` (honouring `RUST_LOG`) by default; a terminal plus file pair when
/// `log_file` is set.
pub fn init(verbose: u8, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let level = level_for(verbose);
    match log_file {
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .try_init()?;
        }
        Some(path) => {
            let config = ConfigBuilder::new()
                .set_target_level(LevelFilter::Error)
                .build();
            CombinedLogger::init(vec![
                TermLogger::new(
                    level,
                    config.clone(),
                    TerminalMode::Mixed,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(level, config, File::create(path)?),
            ])?;
        }
    }
    Ok(())
}
