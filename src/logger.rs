use std::env;
use std::fs;

use anyhow::{Result, anyhow};
use ftail::Ftail;
use log::{LevelFilter, debug};

const LOGS_DIR: &str = ".logs";
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Warnings and up go to the console; the full log goes to
/// `~/.logs/lnb-tv-games/lnb-tv-games.log` so stdout stays clean for the
/// game listing itself.
pub fn init_logger() -> Result<()> {
    let home = env::home_dir().ok_or_else(|| anyhow!("Could not determine $HOME"))?;
    let logs_path = home.join(LOGS_DIR).join(PKG_NAME);

    // Idempotent, so safe to run on every invocation
    fs::create_dir_all(&logs_path).map_err(|e| {
        anyhow!(
            "Could not create logs dir at {}: {}",
            logs_path.display(),
            e
        )
    })?;

    let logs_file = logs_path.join(format!("{PKG_NAME}.log"));
    Ftail::new()
        .console(LevelFilter::Warn)
        .single_file(&logs_file, true, LevelFilter::Info)
        .init()
        .map_err(|e| anyhow!("Could not initialize logger: {}", e))?;

    debug!("Logging to {}", logs_file.display());
    Ok(())
}
