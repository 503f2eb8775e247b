//! upload

use std::path::Path;

use colored::Colorize;
use depot_fs::{ConfigStore, Location};
use depot_transfer::{Driver, TransferConfig, TransferManager};

use crate::context::Context;
use crate::error::Result;

/// Upload `source` to `dest` using the transfer configuration at `config`.
///
/// For the local driver a relative `dest` is resolved like any other path
/// argument. Other drivers receive `dest` unchanged.
pub fn run_upload(ctx: &Context, source: &str, dest: &str, config: &Path) -> Result<()> {
    let config: TransferConfig = ConfigStore::new().load(&Location::absolute(config))?;
    let destination = match config.driver {
        Driver::Local => ctx.location(dest).resolve().to_string(),
        _ => dest.to_string(),
    };
    let driver = config.driver.kind();

    let manager = TransferManager::from_local_file(&ctx.location(source), destination, config)?;
    let target = manager.destination().to_string();
    let bytes = manager.upload()?;

    println!(
        "{} {} bytes to {} via {}",
        "Uploaded".green().bold(),
        bytes,
        target.cyan(),
        driver
    );
    Ok(())
}

