//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use plib::Point;
use plib::adapters::json::JsonStyle;
use plib::config::PlibConfig;
use plib::output::OutputMode;
use plib::paths;

/// plib - Two-dimensional integer point calculator
#[derive(Parser, Debug)]
#[command(
    name = "plib",
    version,
    about = "Two-dimensional integer point calculator",
    long_about = "Add, subtract, negate and measure integer points.\n\n\
                  Points are given as JSON ({\"x\": 1, \"y\": 2}) or as text \
                  (Point(1, 2), (1, 2) or 1,2)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add two points
    Add {
        /// Left operand
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        /// Right operand
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
    },

    /// Subtract the second point from the first
    Sub {
        /// Left operand
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        /// Right operand
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
    },

    /// Negate a point
    Neg {
        /// Point to negate
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },

    /// Add any number of points, left to right
    Sum {
        /// Points to add, in order
        #[arg(value_parser = parse_point, required = true, allow_hyphen_values = true)]
        points: Vec<Point>,
    },

    /// Euclidean distance between two points
    Distance {
        /// Start point
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        /// End point
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
    },

    /// Check whether a point is the center (0, 0)
    Center {
        /// Point to check
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },

    /// Check whether two points are equal
    Eq {
        /// Left operand
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        /// Right operand
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
    },

    /// Print a point in text and JSON form
    Show {
        /// Point to normalize
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },

    /// Write a config file with output preferences
    Init {
        /// JSON layout (compact, spaced, pretty)
        #[arg(long)]
        style: Option<JsonStyle>,
        /// Decimal places for distances in human output
        #[arg(long)]
        precision: Option<usize>,
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Parse a point argument given as JSON or text notation
pub fn parse_point(arg: &str) -> Result<Point, plib::PointError> {
    if arg.trim_start().starts_with('{') {
        Point::from_json(arg)
    } else {
        arg.parse()
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // init creates the config file, so it must not require one
    let config = match cli.command {
        Some(Command::Init { .. }) => PlibConfig::default(),
        _ => PlibConfig::load(cli.config.as_deref())?,
    };
    let output = &config.output;

    match cli.command {
        Some(Command::Add { a, b }) => commands::add(a, b, output_mode, output),
        Some(Command::Sub { a, b }) => commands::sub(a, b, output_mode, output),
        Some(Command::Neg { point }) => commands::neg(point, output_mode, output),
        Some(Command::Sum { points }) => commands::sum(&points, output_mode, output),
        Some(Command::Distance { a, b }) => commands::distance(a, b, output_mode, output),
        Some(Command::Center { point }) => commands::center(point, output_mode, output),
        Some(Command::Eq { a, b }) => commands::eq(a, b, output_mode, output),
        Some(Command::Show { point }) => commands::show(point, output_mode, output),
        Some(Command::Init {
            style,
            precision,
            force,
        }) => {
            let path = paths::resolve_config(cli.config.as_deref());
            commands::init(&path, style, precision, force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": plib::VERSION
                    })
                );
            } else {
                println!("plib v{}", plib::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": plib::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("plib v{}", plib::VERSION);
                println!("\nRun 'plib --help' for usage");
                println!("Try 'plib distance 0,0 3,4'");
            }
            Ok(())
        },
    }
}
