use std::fs::{self, OpenOptions};

use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Send `log` output to a file so the alternate screen stays clean.
/// `COURIER_LOG` takes precedence over the configured level.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let path = config.log_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::new().filter_or("COURIER_LOG", config.log.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("logging to {}", path.display());
    Ok(())
}
