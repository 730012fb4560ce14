//! Simulation driving and reporting
//!
//! This module contains the step driver, batch experiments, statistics
//! collection, observation hooks, logging setup and error handling.
//!
//! # Overview
//!
//! - **SimulationDriver**: owns the queue and the elevator bank and runs the step loop
//! - **BatchRunner**: repeats a configuration with consecutive seeds
//! - **SimulationStatistics**: collects and reports wait-time metrics
//! - **SimulationObserver**: per-step event hook (arrival trace, event recording)
//! - **SimulationError**: error type for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::simulation::*;
//! use elevator_dispatch_sim::types::*;
//!
//! let config = SimulationConfig {
//!     probability: 0.3,
//!     num_floors: 8,
//!     num_elevators: 2,
//!     length: 50,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut driver = SimulationDriver::new(config)?;
//! let stats = driver.run()?;
//! assert_eq!(stats.steps_simulated, 50);
//! println!("{}", stats.generate_summary_report());
//! # Ok::<(), SimulationError>(())
//! ```

pub mod batch;
pub mod driver;
pub mod error;
pub mod logging;
pub mod observer;
pub mod statistics;

// Re-export all public types for convenience
pub use batch::*;
pub use driver::*;
pub use error::*;
pub use logging::*;
pub use observer::*;
pub use statistics::*;
