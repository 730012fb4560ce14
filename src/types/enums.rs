//! Enumeration types for the elevator simulator
//!
//! This module contains the elevator phase codes and the report output formats.

use crate::simulation::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete phase of an elevator, without the request it may be carrying
///
/// Each phase has a numeric state code: `0` idle, `1` moving to the source
/// floor, `2` moving to the destination floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElevatorPhase {
    /// Stationary with no assigned request
    Idle,
    /// Travelling to pick up the assigned request
    MovingToSource,
    /// Travelling to drop off the assigned request
    MovingToDestination,
}

impl ElevatorPhase {
    /// Numeric state code of this phase
    pub fn code(self) -> u8 {
        match self {
            ElevatorPhase::Idle => 0,
            ElevatorPhase::MovingToSource => 1,
            ElevatorPhase::MovingToDestination => 2,
        }
    }
}

impl TryFrom<u8> for ElevatorPhase {
    type Error = SimulationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ElevatorPhase::Idle),
            1 => Ok(ElevatorPhase::MovingToSource),
            2 => Ok(ElevatorPhase::MovingToDestination),
            other => Err(SimulationError::invalid_parameter(format!(
                "invalid elevator state code {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ElevatorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorPhase::Idle => write!(f, "Idle"),
            ElevatorPhase::MovingToSource => write!(f, "Moving To Source"),
            ElevatorPhase::MovingToDestination => write!(f, "Moving To Destination"),
        }
    }
}

/// Output formats for the end-of-run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human readable result block
    Text,
    /// JSON format for structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
