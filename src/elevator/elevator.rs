//! Elevator state machine
//!
//! An elevator is Idle, or carries exactly one request while moving to its
//! source floor and then to its destination floor. The request lives inside the
//! state, so an idle elevator with a request (or a busy one without) cannot be
//! represented.

use serde::Serialize;
use std::fmt;

use crate::requests::Request;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{ElevatorId, ElevatorPhase};

/// Floor every elevator starts on
pub const GROUND_FLOOR: u32 = 1;

/// Current assignment of an elevator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ElevatorState {
    /// No assigned request, stationary
    Idle,
    /// Travelling to the request's source floor
    MovingToSource(Request),
    /// Travelling to the request's destination floor
    MovingToDestination(Request),
}

impl ElevatorState {
    /// Phase of this state without its request
    pub fn phase(&self) -> ElevatorPhase {
        match self {
            ElevatorState::Idle => ElevatorPhase::Idle,
            ElevatorState::MovingToSource(_) => ElevatorPhase::MovingToSource,
            ElevatorState::MovingToDestination(_) => ElevatorPhase::MovingToDestination,
        }
    }

    /// The request being served, if any
    pub fn request(&self) -> Option<&Request> {
        match self {
            ElevatorState::Idle => None,
            ElevatorState::MovingToSource(request) | ElevatorState::MovingToDestination(request) => {
                Some(request)
            }
        }
    }

    /// Floor the elevator is heading for, if any
    pub fn target_floor(&self) -> Option<u32> {
        match self {
            ElevatorState::Idle => None,
            ElevatorState::MovingToSource(request) => Some(request.source_floor()),
            ElevatorState::MovingToDestination(request) => Some(request.destination_floor()),
        }
    }
}

/// State change produced by one call to [`Elevator::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The source floor was reached and the rider boarded
    PickedUp {
        /// Floor the rider boarded on
        floor: u32,
        /// Steps between arrival and pick-up
        wait_time: u64,
    },
    /// The destination floor was reached; the finished request is handed back
    DroppedOff(Request),
}

/// A single elevator car
#[derive(Debug, Clone, Serialize)]
pub struct Elevator {
    id: ElevatorId,
    current_floor: u32,
    state: ElevatorState,
}

impl Elevator {
    /// Create an idle elevator on the ground floor
    pub fn new(id: ElevatorId) -> Self {
        Self { id, current_floor: GROUND_FLOOR, state: ElevatorState::Idle }
    }

    /// Position of this elevator in the bank
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    /// Floor the elevator is on
    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    /// Current assignment
    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> ElevatorPhase {
        self.state.phase()
    }

    /// The request being served, if any
    pub fn active_request(&self) -> Option<&Request> {
        self.state.request()
    }

    /// Whether the elevator can take a new request
    pub fn is_idle(&self) -> bool {
        matches!(self.state, ElevatorState::Idle)
    }

    /// Move the car directly to `floor`; negative floors are rejected
    pub fn place_at(&mut self, floor: i64) -> SimulationResult<()> {
        if floor < 0 {
            return Err(SimulationError::invalid_parameter(format!(
                "floor must be non-negative, got {}",
                floor
            )));
        }
        self.current_floor = u32::try_from(floor).map_err(|_| {
            SimulationError::invalid_parameter(format!(
                "floor must be at most {}, got {}",
                u32::MAX,
                floor
            ))
        })?;
        Ok(())
    }

    /// Hand a request to an idle elevator, which starts heading for its source
    ///
    /// Busy elevators refuse with `InvalidParameter`; a request is never taken
    /// from the elevator already serving it.
    pub fn assign(&mut self, request: Request) -> SimulationResult<()> {
        if !self.is_idle() {
            return Err(SimulationError::invalid_parameter(format!(
                "{} is {} and cannot take another request",
                self.id,
                self.phase()
            )));
        }
        self.state = ElevatorState::MovingToSource(request);
        Ok(())
    }

    /// Advance one time step
    ///
    /// Moves at most one floor toward the current target. If the car is on the
    /// target after that (including when it started there) the state transition
    /// happens in this same step.
    pub fn advance(&mut self, now: u64) -> Option<Transition> {
        let target = self.state.target_floor()?;

        if self.current_floor < target {
            self.current_floor += 1;
        } else if self.current_floor > target {
            self.current_floor -= 1;
        }

        self.settle(now)
    }

    /// Apply the state transition if the car is on its target, without moving
    ///
    /// This is the at-target half of [`advance`][Self::advance], used for a
    /// car in the step it takes a request.
    pub fn settle(&mut self, now: u64) -> Option<Transition> {
        let target = self.state.target_floor()?;
        if self.current_floor != target {
            return None;
        }

        match std::mem::replace(&mut self.state, ElevatorState::Idle) {
            ElevatorState::MovingToSource(request) => {
                let wait_time = now.saturating_sub(request.arrival_time());
                self.state = ElevatorState::MovingToDestination(request);
                Some(Transition::PickedUp { floor: target, wait_time })
            }
            ElevatorState::MovingToDestination(request) => Some(Transition::DroppedOff(request)),
            ElevatorState::Idle => None,
        }
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on floor {} ({})", self.id, self.current_floor, self.phase())
    }
}
