//! Catalog inspector for `assetkit_core`.
//!
//! # Responsibility
//! - Verify core crate linkage from a standalone executable.
//! - Print catalog entries with deterministic output for quick sanity checks.

use assetkit_core::{AttributeDescriptor, AttributeType, DerivedAttributeDescriptor, LoggingConfig};
use clap::Parser;
use log::info;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    }
}

fn run() -> Result<i32, String> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match cli.command {
        Some(Commands::List) | None => {
            handle_list();
            Ok(0)
        }
        Some(Commands::Show {
            attribute_name,
            json,
        }) => handle_show(&attribute_name, json),
        Some(Commands::Version) => {
            println!("assetkit_core ping={}", assetkit_core::ping());
            println!("assetkit_core version={}", assetkit_core::core_version());
            Ok(0)
        }
    }
}

// Flags override env; env fills what flags leave out.
fn init_logging(cli: &Cli) -> Result<(), String> {
    let mut config = LoggingConfig::from_env();
    if let Some(level) = &cli.log_level {
        config.level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if config.apply()? {
        info!("event=cli_start module=cli status=ok");
    }
    Ok(())
}

fn handle_list() {
    for kind in AttributeType::values() {
        println!("{}", format_row(*kind));
    }
}

fn handle_show(attribute_name: &str, json: bool) -> Result<i32, String> {
    let Some(kind) = AttributeType::get_by_value(attribute_name) else {
        eprintln!("not found: {attribute_name}");
        return Ok(1);
    };

    if json {
        println!("{}", render_json(kind)?);
    } else {
        println!("{}", format_row(kind));
        for meta in kind.meta_item_descriptors() {
            let value = meta
                .initial_value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            println!("  {} {}", meta.urn, value);
        }
    }
    Ok(0)
}

fn render_json(kind: AttributeType) -> Result<String, String> {
    let descriptor = DerivedAttributeDescriptor::from(kind);
    serde_json::to_string_pretty(&descriptor)
        .map_err(|err| format!("failed to encode descriptor: {err}"))
}

fn format_row(kind: AttributeType) -> String {
    let mut row = format!(
        "{} {} {}",
        kind.name(),
        kind.attribute_name(),
        kind.value_descriptor()
    );
    if let Some(label) = kind.label() {
        row.push_str(&format!(" [{label}]"));
    }
    row
}
