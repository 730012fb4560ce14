//! Simulation driver
//!
//! This module contains the SimulationDriver, which owns the request queue and
//! the elevator bank and advances them one time step at a time.

use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::elevator::{Elevator, Transition};
use crate::requests::{ArrivalSource, RandomSource, Request, RequestQueue, RngSource};
use crate::simulation::{NoopObserver, SimulationObserver, SimulationResult, SimulationStatistics};
use crate::types::{ElevatorId, RunId, SimulationConfig};
use crate::{perf_span, sim_event};

/// Runs one simulation from step 1 to `length`
///
/// Each step samples the arrival source, hands queued requests to idle
/// elevators in bank order, then moves every other busy elevator one floor.
/// An elevator that takes a request does not move in that step: it picks up
/// at once if it is already on the source floor, and starts moving on the
/// next step otherwise.
#[derive(Debug)]
pub struct SimulationDriver<S: RandomSource = RngSource> {
    config: SimulationConfig,
    run_id: RunId,
    arrivals: ArrivalSource,
    queue: RequestQueue,
    elevators: Vec<Elevator>,
    rng: S,
    current_step: u64,
    statistics: SimulationStatistics,
}

impl SimulationDriver<RngSource> {
    /// Create a driver whose randomness comes from `config.seed`, or from
    /// entropy when no seed is set
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        let rng = RngSource::from_optional_seed(config.seed);
        Self::with_random_source(config, rng)
    }
}

impl<S: RandomSource> SimulationDriver<S> {
    /// Create a driver drawing from the given random source
    #[instrument(skip(config, rng), fields(floors = config.num_floors, elevators = config.num_elevators))]
    pub fn with_random_source(config: SimulationConfig, rng: S) -> SimulationResult<Self> {
        config.validate()?;
        let arrivals = ArrivalSource::new(config.probability)?;
        let elevators = (0..config.num_elevators).map(|index| Elevator::new(ElevatorId(index))).collect();
        let run_id = RunId::new();

        info!(
            run_id = %run_id,
            "Initializing simulation: p={} floors={} elevators={} length={}",
            config.probability, config.num_floors, config.num_elevators, config.length
        );

        Ok(Self {
            config,
            run_id,
            arrivals,
            queue: RequestQueue::new(),
            elevators,
            rng,
            current_step: 0,
            statistics: SimulationStatistics::new(),
        })
    }

    /// Identifier of this run, used in log records
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Configuration the driver was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The elevator bank in dispatch order
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Number of requests waiting for an elevator
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Last completed step, 0 before the first
    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// Whether every step up to `length` has run
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.config.length
    }

    /// Metrics accumulated so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Run one time step: arrival, dispatch, then movement
    ///
    /// Does nothing once all `length` steps have run.
    pub fn step<O: SimulationObserver + ?Sized>(&mut self, observer: &mut O) -> SimulationResult<()> {
        if self.is_finished() {
            return Ok(());
        }
        self.current_step += 1;
        let now = self.current_step;

        if self.arrivals.request_arrived(&mut self.rng) {
            let request = Request::generate(self.config.num_floors, &mut self.rng)?.with_arrival_time(now);
            sim_event!(
                debug,
                "Request arrived",
                step = now,
                source = request.source_floor(),
                destination = request.destination_floor(),
            );
            self.statistics.record_arrival();
            observer.on_arrival(now, &request);
            self.queue.enqueue(request);
        }
        self.statistics.observe_queue_length(self.queue.len());

        let mut boarding = vec![false; self.elevators.len()];
        for (index, elevator) in self.elevators.iter_mut().enumerate() {
            if self.queue.is_empty() {
                break;
            }
            if elevator.is_idle() {
                let request = self.queue.dequeue()?;
                debug!(step = now, elevator = %elevator.id(), "Dispatching {}", request);
                elevator.assign(request)?;
                boarding[index] = true;
            }
        }

        for (elevator, boarded) in self.elevators.iter_mut().zip(boarding) {
            let transition = if boarded { elevator.settle(now) } else { elevator.advance(now) };
            match transition {
                Some(Transition::PickedUp { floor, wait_time }) => {
                    sim_event!(
                        debug,
                        "Request picked up",
                        step = now,
                        elevator = elevator.id().index(),
                        floor = floor,
                        wait_time = wait_time,
                    );
                    self.statistics.record_pickup(wait_time);
                    observer.on_pickup(now, elevator, wait_time);
                }
                Some(Transition::DroppedOff(request)) => {
                    sim_event!(
                        debug,
                        "Request dropped off",
                        step = now,
                        elevator = elevator.id().index(),
                        floor = request.destination_floor(),
                    );
                    self.statistics.record_dropoff();
                    observer.on_dropoff(now, elevator, &request);
                }
                None => {}
            }
        }

        self.statistics.steps_simulated = now;
        observer.on_step_end(now, &self.elevators);
        Ok(())
    }

    /// Run all remaining steps and return the final metrics
    pub fn run(&mut self) -> SimulationResult<SimulationStatistics> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Run all remaining steps, reporting each event to `observer`
    pub fn run_with_observer<O: SimulationObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> SimulationResult<SimulationStatistics> {
        let span = perf_span!("simulation_run", run_id = tracing::field::display(self.run_id), length = self.config.length);
        let _enter = span.enter();
        let start_time = Instant::now();

        while !self.is_finished() {
            self.step(observer)?;
        }

        self.statistics.requests_waiting = self.queue.len();
        self.statistics.requests_in_service =
            self.elevators.iter().filter(|elevator| !elevator.is_idle()).count();
        self.statistics.set_simulation_duration(start_time.elapsed());

        info!(run_id = %self.run_id, "Simulation finished: {}", self.statistics.generate_compact_summary());
        Ok(self.statistics.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::ScriptedSource;
    use crate::simulation::{EventRecorder, SimulationError};
    use crate::types::ElevatorPhase;

    fn config(probability: f64, floors: u32, elevators: usize, length: u64) -> SimulationConfig {
        SimulationConfig {
            probability,
            num_floors: floors,
            num_elevators: elevators,
            length,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_driver_starts_idle_on_ground_floor() {
        let driver = SimulationDriver::new(config(0.5, 10, 3, 20)).unwrap();
        assert_eq!(driver.elevators().len(), 3);
        assert!(driver.elevators().iter().all(|e| e.is_idle() && e.current_floor() == 1));
        assert_eq!(driver.current_step(), 0);
        assert_eq!(driver.queue_len(), 0);
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let err = SimulationDriver::new(config(1.5, 10, 1, 10)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));

        let err = SimulationDriver::new(config(0.5, 1, 1, 10)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
    }

    #[test]
    fn test_dispatched_elevator_boards_before_moving() {
        let mut driver =
            SimulationDriver::with_random_source(config(1.0, 10, 1, 5), ScriptedSource::with_floors(vec![3, 7]))
                .unwrap();

        driver.step(&mut NoopObserver).unwrap();
        let elevator = &driver.elevators()[0];
        assert_eq!(elevator.phase(), ElevatorPhase::MovingToSource);
        assert_eq!(elevator.current_floor(), 1);

        driver.step(&mut NoopObserver).unwrap();
        assert_eq!(driver.elevators()[0].current_floor(), 2);
    }

    #[test]
    fn test_dispatch_on_source_floor_picks_up_same_step() {
        let mut driver =
            SimulationDriver::with_random_source(config(1.0, 10, 1, 2), ScriptedSource::with_floors(vec![1, 4]))
                .unwrap();

        driver.step(&mut NoopObserver).unwrap();
        let elevator = &driver.elevators()[0];
        assert_eq!(elevator.phase(), ElevatorPhase::MovingToDestination);
        assert_eq!(elevator.current_floor(), 1);
        assert_eq!(driver.statistics().total_requests_served, 1);
        assert_eq!(driver.statistics().total_wait_time, 0);

        driver.step(&mut NoopObserver).unwrap();
        assert_eq!(driver.elevators()[0].current_floor(), 2);
    }

    #[test]
    fn test_step_stops_at_length() {
        let mut driver = SimulationDriver::new(config(0.5, 10, 1, 2)).unwrap();
        for _ in 0..5 {
            driver.step(&mut NoopObserver).unwrap();
        }
        assert_eq!(driver.current_step(), 2);
        assert_eq!(driver.statistics().steps_simulated, 2);
        assert!(driver.is_finished());
    }

    #[test]
    fn test_zero_length_run() {
        let mut driver = SimulationDriver::new(config(1.0, 10, 1, 0)).unwrap();
        let stats = driver.run().unwrap();
        assert_eq!(stats.steps_simulated, 0);
        assert_eq!(stats.total_arrivals, 0);
        assert_eq!(stats.formatted_average_wait_time(), "0.00");
    }

    #[test]
    fn test_end_of_run_counts() {
        let mut driver =
            SimulationDriver::with_random_source(config(1.0, 10, 1, 20), ScriptedSource::with_floors(vec![3, 7]))
                .unwrap();
        let mut recorder = EventRecorder::new();
        let stats = driver.run_with_observer(&mut recorder).unwrap();

        assert_eq!(stats.total_arrivals, 20);
        assert_eq!(stats.total_requests_served, 2);
        assert_eq!(stats.total_wait_time, 12);
        assert_eq!(stats.total_requests_completed, 2);
        assert_eq!(stats.requests_in_service, 1);
        assert_eq!(stats.requests_waiting, 17);
        assert_eq!(stats.formatted_average_wait_time(), "6.00");
        assert_eq!(recorder.arrivals().count(), 20);
    }
}
