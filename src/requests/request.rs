//! Ride requests

use serde::Serialize;
use std::fmt;

use super::random::RandomSource;
use crate::simulation::{SimulationError, SimulationResult};

/// One ride from a source floor to a destination floor
///
/// Floors are 1-based. A request may start and end on the same floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    source_floor: u32,
    destination_floor: u32,
    arrival_time: u64,
}

impl Request {
    /// Create a request with explicit floors
    ///
    /// Fails with `InvalidParameter` if `num_floors <= 1` or either floor lies
    /// outside `1..=num_floors`.
    pub fn new(source_floor: u32, destination_floor: u32, num_floors: u32) -> SimulationResult<Self> {
        check_floor_count(num_floors)?;
        for (label, floor) in [("source", source_floor), ("destination", destination_floor)] {
            if !(1..=num_floors).contains(&floor) {
                return Err(SimulationError::invalid_parameter(format!(
                    "{} floor {} outside 1..={}",
                    label, floor, num_floors
                )));
            }
        }

        Ok(Self { source_floor, destination_floor, arrival_time: 0 })
    }

    /// Draw a request with independent, uniformly random source and destination floors
    pub fn generate<S: RandomSource>(num_floors: u32, rng: &mut S) -> SimulationResult<Self> {
        check_floor_count(num_floors)?;
        let source_floor = rng.next_floor(num_floors);
        let destination_floor = rng.next_floor(num_floors);
        Ok(Self { source_floor, destination_floor, arrival_time: 0 })
    }

    /// Stamp the time step at which the request entered the system
    pub fn with_arrival_time(mut self, arrival_time: u64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Floor where the rider is picked up
    pub fn source_floor(&self) -> u32 {
        self.source_floor
    }

    /// Floor where the rider is dropped off
    pub fn destination_floor(&self) -> u32 {
        self.destination_floor
    }

    /// Time step of arrival; 0 until stamped
    pub fn arrival_time(&self) -> u64 {
        self.arrival_time
    }

    /// Whether source and destination coincide
    pub fn is_self_trip(&self) -> bool {
        self.source_floor == self.destination_floor
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source: {} Destination: {}", self.source_floor, self.destination_floor)
    }
}

fn check_floor_count(num_floors: u32) -> SimulationResult<()> {
    if num_floors <= 1 {
        return Err(SimulationError::invalid_parameter(format!(
            "number of floors must be greater than 1, got {}",
            num_floors
        )));
    }
    Ok(())
}
