//! mkdir, delete, write and ingest

use std::io;

use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

pub fn run_mkdir(ctx: &Context, path: &str) -> Result<()> {
    let mut handle = ctx.handle(path)?;
    if handle.exists() {
        println!("{} {} already exists", "Skipped".yellow(), handle);
        return Ok(());
    }
    handle.make_dir()?;
    println!("{} {}", "Created".green().bold(), handle);
    Ok(())
}

pub fn run_delete(ctx: &Context, path: &str) -> Result<()> {
    let mut handle = ctx.handle(path)?;
    if !handle.exists() {
        println!("{} {} does not exist", "Skipped".yellow(), handle);
        return Ok(());
    }
    handle.delete()?;
    println!("{} {}", "Deleted".green().bold(), handle);
    Ok(())
}

pub fn run_write(ctx: &Context, path: &str, text: &str, append: bool) -> Result<()> {
    let mut handle = ctx.handle(path)?;
    let bytes = if append {
        handle.append_all(text.as_bytes())?
    } else {
        handle.write_string(text)?
    };
    println!("{} {} bytes to {}", "Wrote".green().bold(), bytes, handle);
    Ok(())
}

pub fn run_ingest(ctx: &Context, path: &str) -> Result<()> {
    let mut handle = ctx.handle(path)?;
    let mut stdin = io::stdin().lock();
    let bytes = handle.write_from_stream(&mut stdin)?;
    println!("{} {} bytes into {}", "Ingested".green().bold(), bytes, handle);
    Ok(())
}
