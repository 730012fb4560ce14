// Elevator Dispatch Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/elevator-dispatch-sim
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/elevator-dispatch-sim --probability 0.3 --floors 20 --elevators 4 --length 1000 --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use elevator_dispatch_sim::simulation::{
    ArrivalTracer, BatchRunner, LoggingConfig, SimulationDriver, SimulationStatistics,
};
use elevator_dispatch_sim::types::{CliArgs, OutputFormat, SimulationConfig};
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags; the guard flushes file writers on exit
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    let _logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Elevator Dispatch Simulator");

    let config = match load_configuration(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(&config) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Elevator Dispatch Simulator completed successfully");
}

/// Build the configuration from the config file, CLI flags and optional prompts
fn load_configuration(args: &CliArgs) -> Result<SimulationConfig> {
    let mut config =
        SimulationConfig::from_cli_args(args.clone()).context("could not build configuration")?;

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        config
            .prompt_for_parameters(&mut stdin.lock(), &mut stdout.lock())
            .context("could not read simulation parameters")?;
    }

    config.validate().context("configuration validation failed")?;
    Ok(config)
}

/// Execute a single run or a batch, depending on `config.runs`
fn run(config: &SimulationConfig) -> Result<()> {
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("invalid output format")?;

    if config.runs > 1 {
        return run_batch(config, format);
    }

    let mut driver = SimulationDriver::new(config.clone()).context("could not create simulation")?;
    let statistics = if config.trace_arrivals {
        let stdout = io::stdout();
        let mut tracer = ArrivalTracer::new(stdout.lock());
        let statistics = driver.run_with_observer(&mut tracer)?;
        if let Some(e) = tracer.take_error() {
            return Err(e).context("could not write arrival trace");
        }
        statistics
    } else {
        driver.run()?
    };

    print_statistics(&statistics, format)
}

fn run_batch(config: &SimulationConfig, format: OutputFormat) -> Result<()> {
    let runner = BatchRunner::new(config.clone()).context("could not create batch runner")?;
    let summary = runner.run()?;

    match format {
        OutputFormat::Text => print!("{}", summary.generate_report()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn print_statistics(statistics: &SimulationStatistics, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", statistics.generate_summary_report()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(statistics)?),
    }
    info!("{}", statistics.generate_compact_summary());
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Arrival Probability: {}", config.probability);
    eprintln!("  Floors: {}", config.num_floors);
    eprintln!("  Elevators: {}", config.num_elevators);
    eprintln!("  Length: {} steps", config.length);
    eprintln!("  Runs: {}", config.runs);
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Arrival Trace: {}", if config.trace_arrivals { "on" } else { "off" });
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
