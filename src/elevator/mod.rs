//! Elevator cars and their state machine
//!
//! Each car starts idle on floor 1. When handed a request it moves one floor
//! per step to the source floor, boards the rider, moves to the destination
//! and goes idle again.
//!
//! ```text
//!            assign              reach source           reach destination
//!   Idle ──────────────► MovingToSource ──────► MovingToDestination ──────► Idle
//! ```

pub mod elevator;

pub use elevator::{Elevator, ElevatorState, Transition, GROUND_FLOOR};
