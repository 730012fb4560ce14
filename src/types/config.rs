//! Configuration structures for the elevator simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the parameters of a simulation run.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "elevator-sim",
    version = "0.1.0",
    about = "Elevator Simulator - Discrete-time simulation of elevator dispatch",
    long_about = "Simulates ride requests arriving at random in a multi-floor building and a bank of elevators serving them one floor per time step, then reports wait-time metrics.

EXAMPLES:
    # Run with default settings
    elevator-sim

    # Busy building with three elevators
    elevator-sim --probability 0.4 --floors 20 --elevators 3 --length 500

    # Reproducible run
    elevator-sim --seed 42

    # Average over 50 independent runs
    elevator-sim --runs 50 --seed 7

    # Use a configuration file
    elevator-sim --config config.json

    # Generate configuration template
    elevator-sim --print-config > my-config.json

    # Answer the parameter prompts on stdin
    elevator-sim --interactive

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments or interactive prompts (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Probability that a request arrives at each time step
    #[arg(
        short,
        long,
        help = "Probability of a request arriving per step (0.0-1.0)",
        long_help = "Probability that a new ride request arrives at each time step. Range: 0.0-1.0. Default: 0.1"
    )]
    pub probability: Option<f64>,

    /// Number of floors in the building
    #[arg(
        long = "floors",
        help = "Number of floors in the building",
        long_help = "Number of floors in the building. Must be greater than 1. Default: 10"
    )]
    pub num_floors: Option<u32>,

    /// Number of elevators in the bank
    #[arg(
        long = "elevators",
        help = "Number of elevators",
        long_help = "Number of elevators serving requests. Must be greater than 0. Default: 1"
    )]
    pub num_elevators: Option<usize>,

    /// Length of the simulation in time steps
    #[arg(short, long, help = "Length of the simulation in time steps")]
    pub length: Option<u64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for the final report
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the end-of-run report. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Number of independent runs to average over
    #[arg(long, help = "Number of independent runs (seeded seed, seed+1, ...)")]
    pub runs: Option<usize>,

    /// Suppress the per-arrival trace lines
    #[arg(long, help = "Do not print a line for each arriving request")]
    pub no_trace: bool,

    /// Prompt for the simulation parameters on stdin
    #[arg(short, long, help = "Prompt for probability, floors, elevators and length")]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Probability that a request arrives at each time step (0.0-1.0)
    pub probability: Option<f64>,

    /// Number of floors in the building
    pub num_floors: Option<u32>,

    /// Number of elevators in the bank
    pub num_elevators: Option<usize>,

    /// Length of the simulation in time steps
    pub length: Option<u64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for the final report
    pub output_format: Option<String>,

    /// Whether to print a trace line per arrival
    pub trace_arrivals: Option<bool>,

    /// Number of independent runs
    pub runs: Option<usize>,
}

/// Configuration for an elevator simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Probability that a request arrives at each time step (0.0-1.0)
    pub probability: f64,

    /// Number of floors in the building
    pub num_floors: u32,

    /// Number of elevators in the bank
    pub num_elevators: usize,

    /// Length of the simulation in time steps
    pub length: u64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for the final report
    pub output_format: String,

    /// Whether to print a trace line per arrival
    pub trace_arrivals: bool,

    /// Number of independent runs
    pub runs: usize,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// Interactive input could not be parsed
    #[error("Invalid input for {field}: {input:?}")]
    InvalidInput {
        /// Parameter being prompted for
        field: String,
        /// The text that failed to parse
        input: String,
    },
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Arrival probability is out of range
    #[error("Probability must be between 0.0 and 1.0, got {0}")]
    InvalidProbability(f64),

    /// Floor count is too small
    #[error("Number of floors must be greater than 1, got {0}")]
    InvalidFloorCount(u32),

    /// Elevator count is invalid
    #[error("Number of elevators must be greater than 0, got {0}")]
    InvalidElevatorCount(usize),

    /// Run count is invalid
    #[error("Number of runs must be greater than 0, got {0}")]
    InvalidRunCount(usize),

    /// Output format is unknown
    #[error("{0}")]
    InvalidOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            probability: 0.1,
            num_floors: 10,
            num_elevators: 1,
            length: 100,
            seed: None,
            output_format: "text".to_string(),
            trace_arrivals: true,
            runs: 1,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            probability: config_file.probability.unwrap_or(defaults.probability),
            num_floors: config_file.num_floors.unwrap_or(defaults.num_floors),
            num_elevators: config_file.num_elevators.unwrap_or(defaults.num_elevators),
            length: config_file.length.unwrap_or(defaults.length),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            trace_arrivals: config_file.trace_arrivals.unwrap_or(defaults.trace_arrivals),
            runs: config_file.runs.unwrap_or(defaults.runs),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.probability {
            config.probability = value;
        }
        if let Some(value) = args.num_floors {
            config.num_floors = value;
        }
        if let Some(value) = args.num_elevators {
            config.num_elevators = value;
        }
        if let Some(value) = args.length {
            config.length = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.runs {
            config.runs = value;
        }
        if args.no_trace {
            config.trace_arrivals = false;
        }
    }

    /// Prompt for the four core parameters, one line each
    ///
    /// Reads probability, floors, elevators and length in that order. An empty
    /// line keeps the current value.
    pub fn prompt_for_parameters<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), ConfigError> {
        writeln!(writer, "Welcome to the Elevator simulator!")?;

        if let Some(value) = prompt(
            reader,
            writer,
            "probability",
            "Please enter the probability of arrival for Requests:",
        )? {
            self.probability = value;
        }
        if let Some(value) =
            prompt(reader, writer, "floors", "Please enter the number of floors:")?
        {
            self.num_floors = value;
        }
        if let Some(value) =
            prompt(reader, writer, "elevators", "Please enter the number of elevators:")?
        {
            self.num_elevators = value;
        }
        if let Some(value) = prompt(
            reader,
            writer,
            "length",
            "Please enter the length of the simulation (in time units):",
        )? {
            self.length = value;
        }

        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ConfigValidationError::InvalidProbability(self.probability));
        }

        if self.num_floors <= 1 {
            return Err(ConfigValidationError::InvalidFloorCount(self.num_floors));
        }

        if self.num_elevators == 0 {
            return Err(ConfigValidationError::InvalidElevatorCount(self.num_elevators));
        }

        if self.runs == 0 {
            return Err(ConfigValidationError::InvalidRunCount(self.runs));
        }

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}

fn prompt<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    field: &str,
    message: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", message)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed.parse::<T>().map(Some).map_err(|_| ConfigError::InvalidInput {
        field: field.to_string(),
        input: trimmed.to_string(),
    })
}
