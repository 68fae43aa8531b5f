//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up itemgen CLI defaults.

use crate::config::Config;
use anyhow::Result;
use itemgen::QuoteStyle;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `quote_style` - Optional default quote style
/// * `records` - Optional default records file
/// * `show` - If true, show current configuration
pub fn handle(quote_style: Option<QuoteStyle>, records: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if quote_style.is_none() && records.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, quote_style, records);
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn apply(config: &mut Config, quote_style: Option<QuoteStyle>, records: Option<PathBuf>) {
    if let Some(style) = quote_style {
        config.quote_style = Some(style);
    }
    if let Some(path) = records {
        config.records = Some(path);
    }
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Quote style: {}", config.quote_style.unwrap_or_default());
    match &config.records {
        Some(path) => println!("Records file: {}", path.display()),
        None => println!("No default records file configured"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: itemgen configure --quote-style single|double");
    println!("   or: itemgen configure --records items.json");
    println!("   or: itemgen configure --show");
}
