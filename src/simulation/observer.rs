//! Hooks for watching a run step by step
//!
//! The driver reports arrivals, pick-ups, drop-offs and the end of every step to
//! a [`SimulationObserver`]. All methods default to doing nothing.

use std::io::Write;

use crate::elevator::Elevator;
use crate::requests::Request;
use crate::types::ElevatorId;

/// Receiver of per-step simulation events
pub trait SimulationObserver {
    /// A request arrived and was queued
    fn on_arrival(&mut self, _step: u64, _request: &Request) {}

    /// An elevator reached a request's source floor
    fn on_pickup(&mut self, _step: u64, _elevator: &Elevator, _wait_time: u64) {}

    /// An elevator reached a request's destination floor
    fn on_dropoff(&mut self, _step: u64, _elevator: &Elevator, _request: &Request) {}

    /// All phases of a step are done
    fn on_step_end(&mut self, _step: u64, _elevators: &[Elevator]) {}
}

impl<O: SimulationObserver + ?Sized> SimulationObserver for &mut O {
    fn on_arrival(&mut self, step: u64, request: &Request) {
        (**self).on_arrival(step, request)
    }

    fn on_pickup(&mut self, step: u64, elevator: &Elevator, wait_time: u64) {
        (**self).on_pickup(step, elevator, wait_time)
    }

    fn on_dropoff(&mut self, step: u64, elevator: &Elevator, request: &Request) {
        (**self).on_dropoff(step, elevator, request)
    }

    fn on_step_end(&mut self, step: u64, elevators: &[Elevator]) {
        (**self).on_step_end(step, elevators)
    }
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Writes one `Source: <s> Destination: <d>` line per arrival
///
/// Write errors are kept because observer methods cannot return them; check
/// [`take_error`][Self::take_error] after the run.
#[derive(Debug)]
pub struct ArrivalTracer<W: Write> {
    writer: W,
    last_error: Option<std::io::Error>,
}

impl<W: Write> ArrivalTracer<W> {
    /// Trace arrivals into `writer`
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the first write error, if any
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SimulationObserver for ArrivalTracer<W> {
    fn on_arrival(&mut self, _step: u64, request: &Request) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", request) {
            self.last_error = Some(e);
        }
    }
}

/// Something that happened during a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// A request arrived
    Arrival {
        /// Step of arrival
        step: u64,
        /// The request as queued
        request: Request,
    },
    /// A rider boarded
    Pickup {
        /// Step of pick-up
        step: u64,
        /// Elevator that picked up
        elevator: ElevatorId,
        /// Floor of pick-up
        floor: u32,
        /// Steps the rider waited
        wait_time: u64,
    },
    /// A rider left
    Dropoff {
        /// Step of drop-off
        step: u64,
        /// Elevator that dropped off
        elevator: ElevatorId,
        /// Floor of drop-off
        floor: u32,
    },
}

/// Snapshot of one elevator at the end of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    /// Step the snapshot was taken at
    pub step: u64,
    /// Elevator position in the bank
    pub elevator: ElevatorId,
    /// Floor at the end of the step
    pub floor: u32,
    /// Phase at the end of the step
    pub phase: crate::types::ElevatorPhase,
    /// Whether a request was attached at the end of the step
    pub has_request: bool,
}

/// Records every event and end-of-step snapshot in memory
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    /// Events in the order they happened
    pub events: Vec<StepEvent>,
    /// Elevator snapshots, one per elevator per step
    pub snapshots: Vec<ElevatorSnapshot>,
}

impl EventRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrival events only
    pub fn arrivals(&self) -> impl Iterator<Item = &Request> {
        self.events.iter().filter_map(|event| match event {
            StepEvent::Arrival { request, .. } => Some(request),
            _ => None,
        })
    }

    /// Snapshots of a single elevator, in step order
    pub fn snapshots_of(&self, elevator: ElevatorId) -> impl Iterator<Item = &ElevatorSnapshot> {
        self.snapshots.iter().filter(move |snapshot| snapshot.elevator == elevator)
    }
}

impl SimulationObserver for EventRecorder {
    fn on_arrival(&mut self, step: u64, request: &Request) {
        self.events.push(StepEvent::Arrival { step, request: request.clone() });
    }

    fn on_pickup(&mut self, step: u64, elevator: &Elevator, wait_time: u64) {
        self.events.push(StepEvent::Pickup {
            step,
            elevator: elevator.id(),
            floor: elevator.current_floor(),
            wait_time,
        });
    }

    fn on_dropoff(&mut self, step: u64, elevator: &Elevator, _request: &Request) {
        self.events.push(StepEvent::Dropoff {
            step,
            elevator: elevator.id(),
            floor: elevator.current_floor(),
        });
    }

    fn on_step_end(&mut self, step: u64, elevators: &[Elevator]) {
        self.snapshots.extend(elevators.iter().map(|elevator| ElevatorSnapshot {
            step,
            elevator: elevator.id(),
            floor: elevator.current_floor(),
            phase: elevator.phase(),
            has_request: elevator.active_request().is_some(),
        }));
    }
}
