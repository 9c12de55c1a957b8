//! Vehicle HAL Change-Mode Registry CLI
//!
//! This is the command-line interface for the change-mode registry.
//! It uses the vhal-registry library and adds:
//! - Property resolution by name, hex id or decimal id
//! - Vendor property classifications from a TOML config
//! - Text and JSON reports

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vhal_registry::{
    vehicle_property, ChangeMode, ChangeModeRegistry, PropertyId, RegistryBuilder, RegistryConfig,
};

mod config;
mod report;

use config::{AppConfig, OutputFormat};
use report::{PropertyDescription, PropertyRow};

/// VHAL Registry - Inspect vehicle property change modes
#[derive(Parser, Debug)]
#[command(name = "vhal-registry-cli")]
#[command(about = "Inspect vehicle property change modes (STATIC, ON_CHANGE, CONTINUOUS)", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (config.toml) with vendor properties
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the change mode of one or more properties
    Lookup {
        /// Property name (e.g. PERF_VEHICLE_SPEED), hex id (0x11600207) or decimal id
        #[arg(required = true, value_name = "PROPERTY")]
        properties: Vec<String>,
    },

    /// List every classified property
    List {
        /// Only list properties with this change mode
        #[arg(short, long, value_name = "MODE")]
        mode: Option<ChangeMode>,
    },

    /// Show how many properties each change mode covers
    Stats,

    /// Decode a property id and show its change mode
    Describe {
        /// Property name, hex id or decimal id
        #[arg(value_name = "PROPERTY")]
        property: String,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("VHAL Registry CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using registry library v{}", vhal_registry::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let output = run(&args.command, &config, format)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

/// Execute one command and return the rendered output
fn run(command: &Command, config: &AppConfig, format: OutputFormat) -> Result<String> {
    let custom;
    let registry: &ChangeModeRegistry = if config.registry == RegistryConfig::default() {
        ChangeModeRegistry::builtin()
    } else {
        custom = RegistryBuilder::from_config(&config.registry)
            .build()
            .context("Failed to build change-mode registry from configuration")?;
        &custom
    };

    match command {
        Command::Lookup { properties } => {
            let rows = properties
                .iter()
                .map(|arg| {
                    let id = resolve_property(arg, config)?;
                    Ok(row_for(id, registry, config))
                })
                .collect::<Result<Vec<_>>>()?;

            for row in rows.iter().filter(|r| r.change_mode.is_none()) {
                log::debug!("Property {} is not classified", row.id);
            }

            report::render_rows(&rows, format)
        }
        Command::List { mode } => {
            let rows: Vec<PropertyRow> = registry
                .all()
                .filter(|entry| mode.map_or(true, |m| entry.change_mode == m))
                .map(|entry| row_for(entry.id, registry, config))
                .collect();

            report::render_rows(&rows, format)
        }
        Command::Stats => report::render_stats(&registry.stats(), format),
        Command::Describe { property } => {
            let id = resolve_property(property, config)?;
            let desc = PropertyDescription::new(row_for(id, registry, config));
            report::render_description(&desc, format)
        }
    }
}

/// Resolve a command-line property argument to an id
///
/// Names are tried first (system properties, then configured vendor names),
/// then hex and decimal ids.
fn resolve_property(arg: &str, config: &AppConfig) -> Result<PropertyId> {
    if let Some(id) = vehicle_property::by_name(arg) {
        return Ok(id);
    }

    let vendor = config.registry.vendor_properties.iter().find(|p| {
        p.name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(arg.trim()))
    });
    if let Some(property) = vendor {
        return Ok(property.id);
    }

    match arg.parse::<PropertyId>() {
        Ok(id) => Ok(id),
        Err(_) => bail!("Unknown property {:?}: not a property name or numeric id", arg),
    }
}

fn display_name(id: PropertyId, config: &AppConfig) -> Option<String> {
    vehicle_property::name_of(id)
        .or_else(|| config.registry.vendor_name(id))
        .map(str::to_string)
}

fn row_for(id: PropertyId, registry: &ChangeModeRegistry, config: &AppConfig) -> PropertyRow {
    PropertyRow::new(display_name(id, config), id, registry.lookup(id))
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use vhal_registry::vehicle_property::{DOOR_LOCK, PERF_VEHICLE_SPEED};

    fn vendor_config() -> AppConfig {
        AppConfig {
            registry: RegistryConfig::new().add_named_vendor_property(
                PropertyId::new(0x2140_0101),
                ChangeMode::OnChange,
                "VENDOR_SEAT_MASSAGE",
            ),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_args() {
        let args = Args::try_parse_from([
            "vhal-registry-cli",
            "lookup",
            "PERF_VEHICLE_SPEED",
            "0x16200b02",
            "--json",
        ])
        .unwrap();

        assert!(args.json);
        match args.command {
            Command::Lookup { properties } => assert_eq!(properties.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_mode() {
        let args = Args::try_parse_from(["vhal-registry-cli", "list", "--mode", "on_change"]).unwrap();
        match args.command {
            Command::List { mode } => assert_eq!(mode, Some(ChangeMode::OnChange)),
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Args::try_parse_from(["vhal-registry-cli", "list", "--mode", "never"]).is_err());
    }

    #[test]
    fn test_resolve_property() {
        let config = vendor_config();

        assert_eq!(resolve_property("PERF_VEHICLE_SPEED", &config).unwrap(), PERF_VEHICLE_SPEED);
        assert_eq!(resolve_property("door_lock", &config).unwrap(), DOOR_LOCK);
        assert_eq!(
            resolve_property("vendor_seat_massage", &config).unwrap(),
            PropertyId::new(0x2140_0101)
        );
        assert_eq!(resolve_property("0x16200B02", &config).unwrap(), DOOR_LOCK);
        assert_eq!(resolve_property("371198722", &config).unwrap(), DOOR_LOCK);
        assert!(resolve_property("NOT_A_PROPERTY", &config).is_err());
    }

    #[test]
    fn test_lookup_miss_is_not_an_error() {
        let command = Command::Lookup {
            properties: vec!["0x31200001".to_string(), "INFO_VIN".to_string()],
        };

        let out = run(&command, &AppConfig::default(), OutputFormat::Txt).unwrap();
        assert!(out.contains("unknown"));
        assert!(out.contains("INFO_VIN"));
        assert!(out.contains("STATIC"));
    }

    #[test]
    fn test_run_with_vendor_config() {
        let command = Command::Lookup {
            properties: vec!["VENDOR_SEAT_MASSAGE".to_string()],
        };

        let out = run(&command, &vendor_config(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "VENDOR_SEAT_MASSAGE");
        assert_eq!(value[0]["change_mode"], "ON_CHANGE");
    }

    #[test]
    fn test_run_rejects_conflicting_config() {
        let config = AppConfig {
            registry: RegistryConfig::new()
                .add_vendor_property(PERF_VEHICLE_SPEED, ChangeMode::Static),
            ..AppConfig::default()
        };

        let err = run(&Command::Stats, &config, OutputFormat::Txt).unwrap_err();
        assert!(err.to_string().contains("Failed to build change-mode registry"));
    }

    #[test]
    fn test_list_filtered_by_mode() {
        let command = Command::List {
            mode: Some(ChangeMode::Static),
        };

        let out = run(&command, &AppConfig::default(), OutputFormat::Txt).unwrap();
        assert!(out.contains("INFO_VIN"));
        assert!(!out.contains("PERF_VEHICLE_SPEED"));
        assert!(!out.contains("ON_CHANGE"));
    }
}
