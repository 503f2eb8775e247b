//! copy-file, copy-many and copy-dir

use colored::Colorize;
use depot_fs::{CopyTarget, copy_many_files_to};

use crate::context::Context;
use crate::error::Result;

pub fn run_copy_file(ctx: &Context, source: &str, dest_dir: &str, name: Option<&str>) -> Result<()> {
    let handle = ctx.handle(source)?;
    let bytes = handle.copy_file_to(&ctx.location(dest_dir), name)?;
    println!(
        "{} {} -> {} ({} bytes)",
        "Copied".green().bold(),
        handle,
        dest_dir.cyan(),
        bytes
    );
    Ok(())
}

pub fn run_copy_many(ctx: &Context, dest_dir: &str, sources: &[String]) -> Result<()> {
    let targets = sources
        .iter()
        .map(|source| ctx.handle(source).map(CopyTarget::new))
        .collect::<Result<Vec<_>>>()?;
    let bytes = copy_many_files_to(&targets, &ctx.location(dest_dir))?;
    println!(
        "{} {} files -> {} ({} bytes)",
        "Copied".green().bold(),
        targets.len(),
        dest_dir.cyan(),
        bytes
    );
    Ok(())
}

pub fn run_copy_dir(ctx: &Context, source: &str, dest_dir: &str) -> Result<()> {
    let handle = ctx.handle(source)?;
    let summary = handle.copy_directory_to(&ctx.location(dest_dir))?;
    println!(
        "{} {} files from {} -> {} ({} bytes)",
        "Copied".green().bold(),
        summary.files_copied,
        handle,
        dest_dir.cyan(),
        summary.bytes_copied
    );
    Ok(())
}
