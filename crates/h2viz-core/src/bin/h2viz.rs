//! h2viz - inspect colormaps, number formatting and axis scaling
//!
//! # Commands
//!
//! - `h2viz color <value> --min 0 --max 500` - Map a value to a color
//! - `h2viz format <value> --unit MPa` - Format a value for display
//! - `h2viz domain <values...>` - Padded axis domain of a sample
//! - `h2viz ticks <min> <max>` - Nice tick positions
//! - `h2viz normalize <values...> [--log]` - Normalize a sample onto [0, 1]
//! - `h2viz gradient` - CSS legend gradient for a colormap
//! - `h2viz palette <count>` - Discrete hex colors from a colormap
//!
//! Defaults come from `--config <path>` or `<config dir>/h2viz/config.toml`.
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use h2viz_core::{
    calculate_domain, calculate_nice_ticks, discrete_colors, format_value, gradient_css,
    interpolate_color, normalize_log_scale, normalize_values, AxisScale, ColormapName, Domain,
    VizConfig,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Visualization formatting toolkit for hydrogen vessel design charts
#[derive(Parser)]
#[command(name = "h2viz")]
#[command(about = "Colormaps, number formatting and axis scaling", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a value in [min, max] to a color
    Color {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,

        /// Colormap (jet, thermal, viridis, plasma, coolwarm)
        #[arg(long)]
        colormap: Option<ColormapName>,
    },

    /// Format a value for display
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Fractional digits
        #[arg(long)]
        precision: Option<u32>,

        /// Unit appended to the value
        #[arg(long)]
        unit: Option<String>,

        /// Force exponential notation
        #[arg(long)]
        scientific: bool,

        /// Disable k/M abbreviation
        #[arg(long)]
        no_compact: bool,
    },

    /// Padded axis domain of a sample
    Domain {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Fraction of the range added on each side
        #[arg(long)]
        padding: Option<f64>,
    },

    /// Nice tick positions covering [min, max]
    Ticks {
        #[arg(allow_negative_numbers = true)]
        min: f64,

        #[arg(allow_negative_numbers = true)]
        max: f64,

        /// Target number of ticks
        #[arg(long)]
        count: Option<usize>,

        /// Decade ticks on a log10 axis
        #[arg(long)]
        log: bool,
    },

    /// Normalize a sample onto [0, 1]
    Normalize {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Use a log10 scale
        #[arg(long)]
        log: bool,
    },

    /// CSS linear-gradient for a colormap legend
    Gradient {
        #[arg(long)]
        colormap: Option<ColormapName>,

        /// Number of color stops
        #[arg(long)]
        stops: Option<usize>,

        /// CSS gradient direction
        #[arg(long)]
        direction: Option<String>,
    },

    /// Evenly spaced hex colors from a colormap
    Palette {
        count: u32,

        #[arg(long)]
        colormap: Option<ColormapName>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Color {
            value,
            min,
            max,
            colormap,
        } => {
            let color = interpolate_color(value, min, max, colormap.unwrap_or(config.colormap));
            if cli.json {
                print_json(&color)?;
            } else {
                println!("{} {}", color.to_hex(), color.to_css());
            }
        }
        Commands::Format {
            value,
            precision,
            unit,
            scientific,
            no_compact,
        } => {
            let mut options = config.format.clone();
            if let Some(precision) = precision {
                options.precision = precision;
            }
            if unit.is_some() {
                options.unit = unit;
            }
            options.is_scientific |= scientific;
            options.compact &= !no_compact;
            println!("{}", format_value(value, &options));
        }
        Commands::Domain { values, padding } => {
            let domain = calculate_domain(&values, padding.unwrap_or(config.domain_padding))?;
            if cli.json {
                print_json(&domain)?;
            } else {
                println!("{} {}", domain.min, domain.max);
            }
        }
        Commands::Ticks {
            min,
            max,
            count,
            log,
        } => {
            let count = count.unwrap_or(config.tick_count);
            if log {
                let ticks = AxisScale::log10(Domain::new(min, max)).ticks(count, &config.format);
                if cli.json {
                    print_json(&ticks)?;
                } else {
                    for tick in ticks {
                        println!("{}\t{}", tick.value, tick.label);
                    }
                }
            } else {
                let ticks = calculate_nice_ticks(min, max, count);
                if cli.json {
                    print_json(&ticks)?;
                } else {
                    println!("{}", join(&ticks));
                }
            }
        }
        Commands::Normalize { values, log } => {
            let result = if log {
                normalize_log_scale(&values)
            } else {
                normalize_values(&values)?
            };
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", join(&result.normalized));
            }
        }
        Commands::Gradient {
            colormap,
            stops,
            direction,
        } => {
            let css = gradient_css(
                colormap.unwrap_or(config.colormap),
                stops.unwrap_or(config.gradient_stops),
                direction.as_deref().unwrap_or(&config.gradient_direction),
            );
            println!("{}", css);
        }
        Commands::Palette { count, colormap } => {
            let colors = discrete_colors(colormap.unwrap_or(config.colormap), count);
            if cli.json {
                print_json(&colors)?;
            } else {
                println!("{}", colors.join(" "));
            }
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> Result<VizConfig, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        return Ok(VizConfig::load(path)?);
    }

    let default_path = dirs::config_dir().map(|dir| dir.join("h2viz").join("config.toml"));
    match default_path {
        Some(path) if path.exists() => Ok(VizConfig::load(&path)?),
        _ => {
            tracing::debug!("no configuration file, using defaults");
            Ok(VizConfig::default())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
