//! Core types and identifiers for the elevator simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: run identifiers for log correlation and elevator indices
//! - **Enums**: elevator phases and report output formats
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::types::*;
//!
//! let config = SimulationConfig {
//!     probability: 0.25,
//!     num_floors: 12,
//!     num_elevators: 3,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let phase = ElevatorPhase::try_from(1u8).unwrap();
//! assert_eq!(phase, ElevatorPhase::MovingToSource);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
