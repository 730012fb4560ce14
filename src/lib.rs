//! Elevator Dispatch Simulator
//!
//! A discrete-time simulation of a bank of elevators serving randomly arriving
//! ride requests in a multi-floor building.
//!
//! # Overview
//!
//! At every time step a request may arrive (a biased coin flip), idle elevators
//! take queued requests in arrival order, and every busy elevator moves one floor
//! toward its current target: first the rider's source floor, then the
//! destination. The simulation reports the total and average time riders waited
//! to be picked up.
//!
//! ## Key Features
//!
//! - **Tagged elevator state**: the assigned request lives inside the moving states
//! - **Injectable randomness**: seeded, entropy-based or scripted draws
//! - **Observation hooks**: arrival traces and full per-step event recording
//! - **Batch Experiments**: repeated runs with consecutive seeds
//! - **Configurable Simulation**: CLI flags, JSON config files and interactive prompts
//!
//! ## Quick Start
//!
//! ```rust
//! use elevator_dispatch_sim::*;
//!
//! let config = SimulationConfig {
//!     probability: 0.2,
//!     num_floors: 10,
//!     num_elevators: 2,
//!     length: 200,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut driver = SimulationDriver::new(config)?;
//! let stats = driver.run()?;
//! println!("Average wait: {}", stats.formatted_average_wait_time());
//! # Ok::<(), SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums and configuration
//! - [`requests`]: requests, the arrival source, the request queue and randomness
//! - [`elevator`]: the elevator state machine
//! - [`simulation`]: the step driver, batches, statistics, observers and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Requests   │    │  Elevator   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Arrival     │◄───┤ State       │
//! │ Enums       │    │ Queue       │    │ Machine     │
//! │ Config      │    │ Randomness  │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//!        │           ┌─────────────┐             │
//!        └───────────┤ Simulation  ├─────────────┘
//!                    │             │
//!                    │ Driver      │
//!                    │ Batch       │
//!                    │ Statistics  │
//!                    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod elevator;
pub mod requests;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs, ConfigError, ConfigValidationError, ElevatorId, ElevatorPhase, OutputFormat, RunId,
    SimulationConfig,
};

// Requests and randomness
pub use requests::{ArrivalSource, RandomSource, Request, RequestQueue, RngSource, ScriptedSource};

// Elevators
pub use elevator::{Elevator, ElevatorState, Transition};

// Simulation
pub use simulation::{
    ArrivalTracer, BatchRunner, BatchSummary, EventRecorder, LoggingConfig, LoggingGuard,
    NoopObserver, RunOutcome, SimulationDriver, SimulationError, SimulationObserver,
    SimulationResult, SimulationStatistics, StepEvent,
};
