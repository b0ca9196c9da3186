//! Compound Units CLI
//!
//! Main entry point for the `cunits` command.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use compound_units::{UnitRegistry, UnitValue, UnitsConfig};

#[derive(Parser)]
#[command(name = "cunits")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Convert and combine physical quantities",
    long_about = "Convert and combine physical quantities.\n\nUnit expressions are registered symbols joined by `*` and `/`, with optional `^power`: `km/h`, `kg*m/s^2`, `cm^3`."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value into another unit
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit
        from: String,

        /// Target unit
        to: String,

        /// Honor affine zero points (temperatures)
        #[arg(short, long)]
        absolute: bool,
    },

    /// Convert a value into the display unit that reads best
    Auto {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        unit: String,

        /// Magnitude to aim for (defaults to the configured target)
        #[arg(short, long)]
        target: Option<f64>,
    },

    /// Combine two values
    Calc {
        #[arg(allow_negative_numbers = true)]
        lhs: f64,

        lhs_unit: String,

        #[arg(value_enum)]
        op: Operation,

        #[arg(allow_negative_numbers = true)]
        rhs: f64,

        rhs_unit: String,
    },

    /// Raise a value to a power
    Pow {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        unit: String,

        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },

    /// Compare two values of the same dimension
    Compare {
        #[arg(allow_negative_numbers = true)]
        lhs: f64,

        lhs_unit: String,

        #[arg(allow_negative_numbers = true)]
        rhs: f64,

        rhs_unit: String,

        /// Absolute tolerance (defaults to the configured epsilon)
        #[arg(short, long)]
        epsilon: Option<f64>,
    },

    /// List the registered units
    Units,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = match &cli.config {
        Some(path) => UnitsConfig::from_file(path)?,
        None => UnitsConfig::default(),
    };
    let registry = UnitRegistry::from_config(&config)?;
    tracing::debug!("Registry holds {} units", registry.len());

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            absolute,
        } => convert(&registry, value, &from, &to, absolute),

        Commands::Auto {
            value,
            unit,
            target,
        } => auto(&registry, value, &unit, target.unwrap_or(config.display_target)),

        Commands::Calc {
            lhs,
            lhs_unit,
            op,
            rhs,
            rhs_unit,
        } => calc(&registry, (lhs, &lhs_unit), op, (rhs, &rhs_unit)),

        Commands::Pow {
            value,
            unit,
            exponent,
        } => pow(&registry, value, &unit, exponent),

        Commands::Compare {
            lhs,
            lhs_unit,
            rhs,
            rhs_unit,
            epsilon,
        } => compare(
            &registry,
            (lhs, &lhs_unit),
            (rhs, &rhs_unit),
            epsilon.unwrap_or(config.epsilon),
        ),

        Commands::Units => list_units(&registry),
    }
}

fn value_of(registry: &UnitRegistry, magnitude: f64, unit: &str) -> Result<UnitValue> {
    Ok(UnitValue::new(magnitude, registry.parse_unit(unit)?))
}

fn convert(registry: &UnitRegistry, value: f64, from: &str, to: &str, absolute: bool) -> Result<()> {
    let value = value_of(registry, value, from)?;
    let to = registry.parse_unit(to)?;
    tracing::info!("Converting {} into {}", value, to);
    let converted = if absolute {
        value.convert_absolute(&to)?
    } else {
        value.convert(&to)?
    };
    println!("{}", converted);
    Ok(())
}

fn auto(registry: &UnitRegistry, value: f64, unit: &str, target: f64) -> Result<()> {
    let value = value_of(registry, value, unit)?;
    println!("{}", value.convert_auto(registry, target));
    Ok(())
}

fn calc(registry: &UnitRegistry, lhs: (f64, &str), op: Operation, rhs: (f64, &str)) -> Result<()> {
    let lhs = value_of(registry, lhs.0, lhs.1)?;
    let rhs = value_of(registry, rhs.0, rhs.1)?;
    let result = match op {
        Operation::Add => lhs.add(&rhs)?,
        Operation::Sub => lhs.sub(&rhs)?,
        Operation::Mul => lhs.mul(&rhs),
        Operation::Div => lhs.div(&rhs),
    };
    println!("{}", result);
    Ok(())
}

fn pow(registry: &UnitRegistry, value: f64, unit: &str, exponent: f64) -> Result<()> {
    let value = value_of(registry, value, unit)?;
    println!("{}", value.pow(exponent)?);
    Ok(())
}

fn compare(registry: &UnitRegistry, lhs: (f64, &str), rhs: (f64, &str), epsilon: f64) -> Result<()> {
    let lhs = value_of(registry, lhs.0, lhs.1)?;
    let rhs = value_of(registry, rhs.0, rhs.1)?;
    let symbol = match lhs.compare_within(&rhs, epsilon)? {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
        std::cmp::Ordering::Greater => ">",
    };
    println!("{} {} {}", lhs, symbol, rhs);
    Ok(())
}

fn list_units(registry: &UnitRegistry) -> Result<()> {
    for unit in registry.units() {
        println!("{:<12} {:<20} {}", unit.short_name(), unit.long_name(), unit.dimension_signature());
    }
    Ok(())
}
