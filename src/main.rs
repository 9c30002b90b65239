use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use spa_registrar::naming::record_entity_id;
use spa_registrar::{process_document, register_all, AggregatorType, SpaDocument};
use spa_registrar_core::{ConfigSchema, ValueType};
use std::path::PathBuf;

/// spa-registrar - Validate hot tub display sensor config and generate its wiring code
#[derive(Parser, Debug, Clone)]
#[command(name = "spa-registrar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration document (JSON) to process
    #[arg(value_name = "CONFIG_FILE", required_unless_present = "show_schema")]
    config_file: Option<PathBuf>,

    /// Write generated code to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Device name used to derive entity ids
    #[arg(short = 'n', long = "device-name", value_name = "NAME", default_value = "esp32-spa")]
    device_name: String,

    /// Print the entity ids the config exposes instead of code
    #[arg(short = 'e', long = "list-entities")]
    list_entities: bool,

    /// Print the accepted keys of every platform and exit
    #[arg(short = 's', long = "show-schema")]
    show_schema: bool,

    /// C++ namespace of the display aggregator class
    #[arg(long = "namespace", value_name = "NAMESPACE", default_value = "esp32_spa_v2")]
    namespace: String,

    /// C++ class name of the display aggregator
    #[arg(long = "class", value_name = "CLASS", default_value = "HotTubDisplaySensor")]
    class_name: String,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug (one line per wiring call)
    // Level 3+: trace (every emitted statement)
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let platforms = register_all();

    if cli.show_schema {
        for platform in platforms.platforms() {
            println!("{}:", platform.domain);
            print_schema(&(platform.schema)(), 1);
            println!();
        }
        return Ok(());
    }

    let config_file = cli
        .config_file
        .as_ref()
        .context("No configuration file given")?;

    info!("Loading {}", config_file.display());
    let document = SpaDocument::load_from_path(config_file)?;
    let aggregator_type = AggregatorType::new(cli.namespace.clone(), cli.class_name.clone());
    let report = process_document(&document, &platforms, aggregator_type)?;

    if report.registry.aggregators().is_empty() {
        warn!("No '{}' platform entries found", spa_registrar::PLATFORM_NAME);
    }

    let output = if cli.list_entities {
        let mut out = String::new();
        for entity in report.exposed_entities() {
            out.push_str(&record_entity_id(&cli.device_name, entity));
            out.push('\n');
        }
        out
    } else {
        report.program.render_cpp()
    };

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, output)
                .with_context(|| format!("Could not write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn print_schema(schema: &ConfigSchema, depth: usize) {
    let indent = "  ".repeat(depth);
    for option in &schema.options {
        let marker = if option.required { "required" } else { "optional" };
        match &option.value_type {
            ValueType::Map(nested) => {
                println!("{}{} ({}): {}", indent, option.key, marker, option.description);
                print_schema(nested, depth + 1);
            }
            ValueType::Enum(allowed) => println!(
                "{}{} ({}, one of {}): {}",
                indent,
                option.key,
                marker,
                allowed.join("|"),
                option.description
            ),
            _ => println!("{}{} ({}): {}", indent, option.key, marker, option.description),
        }
    }
}
