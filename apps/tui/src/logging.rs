use color_eyre::Result;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

use crate::config::AppConfig;

/// Installs the global logger.
///
/// With a log file everything goes there. Without one, the interactive UI logs
/// nothing so the alternate screen stays clean, and headless mode keeps errors
/// on stderr.
pub fn init(config: &AppConfig, headless: bool) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    } else if headless {
        if !config.debug {
            builder.filter_level(log::LevelFilter::Error);
        }
        builder.target(Target::Stderr);
    } else {
        builder.filter_level(log::LevelFilter::Off);
    }

    builder.try_init()?;
    Ok(())
}
