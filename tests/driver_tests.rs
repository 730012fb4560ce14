//! End-to-end tests for the simulation driver
//!
//! These tests run complete simulations with scripted and seeded randomness and
//! check the reference trace, the aggregate metrics and the per-step invariants.

use elevator_dispatch_sim::simulation::{
    ArrivalTracer, EventRecorder, NoopObserver, SimulationDriver, StepEvent,
};
use elevator_dispatch_sim::requests::ScriptedSource;
use elevator_dispatch_sim::types::{ElevatorId, ElevatorPhase, SimulationConfig};

fn config(probability: f64, floors: u32, elevators: usize, length: u64) -> SimulationConfig {
    SimulationConfig {
        probability,
        num_floors: floors,
        num_elevators: elevators,
        length,
        ..Default::default()
    }
}

/// A request 3 -> 7 arriving at step 1 is picked up at step 3 and dropped at step 7
#[test]
fn test_reference_trace() {
    let mut driver = SimulationDriver::with_random_source(
        config(1.0, 10, 1, 20),
        ScriptedSource::with_floors(vec![3, 7]),
    )
    .unwrap();
    let mut recorder = EventRecorder::new();
    driver.run_with_observer(&mut recorder).unwrap();

    let first_pickup = recorder
        .events
        .iter()
        .find(|event| matches!(event, StepEvent::Pickup { .. }))
        .cloned();
    assert_eq!(
        first_pickup,
        Some(StepEvent::Pickup { step: 3, elevator: ElevatorId(0), floor: 3, wait_time: 2 })
    );

    let first_dropoff = recorder
        .events
        .iter()
        .find(|event| matches!(event, StepEvent::Dropoff { .. }))
        .cloned();
    assert_eq!(first_dropoff, Some(StepEvent::Dropoff { step: 7, elevator: ElevatorId(0), floor: 7 }));

    let at_step_7 = recorder.snapshots_of(ElevatorId(0)).find(|snapshot| snapshot.step == 7).unwrap();
    assert_eq!(at_step_7.floor, 7);
    assert_eq!(at_step_7.phase, ElevatorPhase::Idle);
    assert!(!at_step_7.has_request);

    let floors: Vec<u32> = recorder.snapshots_of(ElevatorId(0)).take(7).map(|s| s.floor).collect();
    assert_eq!(floors, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_reference_trace_totals() {
    let mut driver = SimulationDriver::with_random_source(
        config(1.0, 10, 1, 7),
        ScriptedSource::with_floors(vec![3, 7]),
    )
    .unwrap();
    let stats = driver.run().unwrap();

    assert_eq!(stats.total_requests_served, 1);
    assert_eq!(stats.total_wait_time, 2);
    assert_eq!(stats.formatted_average_wait_time(), "2.00");
    assert_eq!(stats.total_requests_completed, 1);
    assert!(driver.elevators()[0].is_idle());
}

#[test]
fn test_zero_probability_serves_nothing() {
    let mut driver = SimulationDriver::new(SimulationConfig {
        seed: Some(11),
        ..config(0.0, 10, 2, 500)
    })
    .unwrap();
    let stats = driver.run().unwrap();

    assert_eq!(stats.total_arrivals, 0);
    assert_eq!(stats.total_requests_served, 0);
    assert_eq!(stats.total_wait_time, 0);
    assert_eq!(stats.formatted_average_wait_time(), "0.00");
    assert!(stats.generate_summary_report().contains("Average Wait Time: 0.00"));
    assert!(driver.elevators().iter().all(|e| e.is_idle() && e.current_floor() == 1));
}

#[test]
fn test_same_seed_same_totals() {
    let seeded = SimulationConfig { seed: Some(2024), ..config(0.35, 15, 3, 400) };

    let first = SimulationDriver::new(seeded.clone()).unwrap().run().unwrap();
    let second = SimulationDriver::new(seeded).unwrap().run().unwrap();

    assert_eq!(first.total_arrivals, second.total_arrivals);
    assert_eq!(first.total_requests_served, second.total_requests_served);
    assert_eq!(first.total_wait_time, second.total_wait_time);
    assert_eq!(first.max_wait_time, second.max_wait_time);
    assert_eq!(first.requests_waiting, second.requests_waiting);
}

#[test]
fn test_invariants_hold_after_every_step() {
    let num_floors = 12;
    let mut driver = SimulationDriver::new(SimulationConfig {
        seed: Some(99),
        ..config(0.4, num_floors, 3, 300)
    })
    .unwrap();
    let mut recorder = EventRecorder::new();
    driver.run_with_observer(&mut recorder).unwrap();

    for snapshot in &recorder.snapshots {
        assert_eq!(snapshot.has_request, snapshot.phase != ElevatorPhase::Idle);
        assert!(snapshot.floor >= 1 && snapshot.floor <= num_floors);
    }

    for request in recorder.arrivals() {
        assert!((1..=num_floors).contains(&request.source_floor()));
        assert!((1..=num_floors).contains(&request.destination_floor()));
    }

    for index in 0..3 {
        let floors: Vec<u32> = recorder.snapshots_of(ElevatorId(index)).map(|s| s.floor).collect();
        assert_eq!(floors.len(), 300);
        for pair in floors.windows(2) {
            assert!(pair[0].abs_diff(pair[1]) <= 1);
        }
    }
}

#[test]
fn test_movement_never_increases_distance_to_target() {
    let mut driver = SimulationDriver::new(SimulationConfig {
        seed: Some(5),
        ..config(0.5, 9, 2, 200)
    })
    .unwrap();

    for _ in 0..200 {
        let before: Vec<_> = driver
            .elevators()
            .iter()
            .map(|e| (e.current_floor(), e.state().target_floor()))
            .collect();
        driver.step(&mut NoopObserver).unwrap();

        for (elevator, (floor_before, target)) in driver.elevators().iter().zip(before) {
            if let Some(target) = target {
                assert!(elevator.current_floor().abs_diff(target) <= floor_before.abs_diff(target));
            }
        }
    }
    assert!(driver.is_finished());
}

#[test]
fn test_dispatch_uses_first_idle_elevator() {
    // Coin flips: arrival on step 1 only, then nothing
    let rng = ScriptedSource::new(vec![0.0, 0.9, 0.9, 0.9], vec![4, 6]);
    let mut driver = SimulationDriver::with_random_source(config(0.5, 10, 3, 4), rng).unwrap();
    let mut recorder = EventRecorder::new();
    driver.run_with_observer(&mut recorder).unwrap();

    let busy: Vec<_> = recorder
        .snapshots
        .iter()
        .filter(|snapshot| snapshot.step == 1 && snapshot.has_request)
        .map(|snapshot| snapshot.elevator)
        .collect();
    assert_eq!(busy, vec![ElevatorId(0)]);
    assert!(driver.elevators()[1].is_idle());
    assert!(driver.elevators()[2].is_idle());
}

#[test]
fn test_requests_dispatched_in_arrival_order() {
    let rng = ScriptedSource::with_floors(vec![3, 7, 5, 9]);
    let mut driver = SimulationDriver::with_random_source(config(1.0, 10, 2, 2), rng).unwrap();
    driver.run().unwrap();

    let first = driver.elevators()[0].active_request().unwrap();
    let second = driver.elevators()[1].active_request().unwrap();
    assert_eq!((first.source_floor(), first.arrival_time()), (3, 1));
    assert_eq!((second.source_floor(), second.arrival_time()), (5, 2));
    assert_eq!(driver.elevators()[0].current_floor(), 2);
    assert_eq!(driver.elevators()[1].current_floor(), 1);
}

#[test]
fn test_arrival_trace_lines() {
    let rng = ScriptedSource::with_floors(vec![3, 7, 2, 2]);
    let mut driver = SimulationDriver::with_random_source(config(1.0, 10, 1, 2), rng).unwrap();
    let mut tracer = ArrivalTracer::new(Vec::new());
    driver.run_with_observer(&mut tracer).unwrap();

    assert!(tracer.take_error().is_none());
    let output = String::from_utf8(tracer.into_inner()).unwrap();
    assert_eq!(output, "Source: 3 Destination: 7\nSource: 2 Destination: 2\n");
}

/// A car already on the source floor picks up in the step it is dispatched
#[test]
fn test_dispatch_on_source_floor_has_zero_wait() {
    let mut driver = SimulationDriver::with_random_source(
        config(1.0, 10, 1, 2),
        ScriptedSource::with_floors(vec![1, 4]),
    )
    .unwrap();
    let mut recorder = EventRecorder::new();
    let stats = driver.run_with_observer(&mut recorder).unwrap();

    let pickups: Vec<_> = recorder
        .events
        .iter()
        .filter_map(|event| match event {
            StepEvent::Pickup { step, wait_time, .. } => Some((*step, *wait_time)),
            _ => None,
        })
        .collect();
    assert_eq!(pickups, vec![(1, 0)]);
    assert_eq!(stats.total_wait_time, 0);
    assert_eq!(stats.formatted_average_wait_time(), "0.00");
    assert_eq!(driver.elevators()[0].current_floor(), 2);
}

#[test]
fn test_self_trip_on_ground_floor() {
    let mut driver = SimulationDriver::with_random_source(
        config(1.0, 10, 1, 2),
        ScriptedSource::with_floors(vec![1, 1]),
    )
    .unwrap();
    let mut recorder = EventRecorder::new();
    driver.run_with_observer(&mut recorder).unwrap();

    assert_eq!(
        &recorder.events[..4],
        &[
            StepEvent::Arrival {
                step: 1,
                request: elevator_dispatch_sim::requests::Request::new(1, 1, 10).unwrap().with_arrival_time(1),
            },
            StepEvent::Pickup { step: 1, elevator: ElevatorId(0), floor: 1, wait_time: 0 },
            StepEvent::Arrival {
                step: 2,
                request: elevator_dispatch_sim::requests::Request::new(1, 1, 10).unwrap().with_arrival_time(2),
            },
            StepEvent::Dropoff { step: 2, elevator: ElevatorId(0), floor: 1 },
        ]
    );
    assert!(driver.elevators()[0].is_idle());
}

#[test]
fn test_self_trip_on_upper_floor() {
    let mut driver = SimulationDriver::with_random_source(
        config(1.0, 10, 1, 6),
        ScriptedSource::with_floors(vec![5, 5]),
    )
    .unwrap();
    let mut recorder = EventRecorder::new();
    let stats = driver.run_with_observer(&mut recorder).unwrap();

    let transitions: Vec<_> = recorder
        .events
        .iter()
        .filter(|event| !matches!(event, StepEvent::Arrival { .. }))
        .cloned()
        .collect();
    assert_eq!(
        transitions,
        vec![
            StepEvent::Pickup { step: 5, elevator: ElevatorId(0), floor: 5, wait_time: 4 },
            StepEvent::Dropoff { step: 6, elevator: ElevatorId(0), floor: 5 },
        ]
    );
    assert_eq!(stats.total_requests_completed, 1);
    assert_eq!(driver.elevators()[0].current_floor(), 5);
}

#[test]
fn test_stepping_past_length_is_a_no_op() {
    let mut driver = SimulationDriver::new(SimulationConfig { seed: Some(4), ..config(0.5, 10, 2, 3) }).unwrap();
    let stats = driver.run().unwrap();
    let mut recorder = EventRecorder::new();

    driver.step(&mut recorder).unwrap();

    assert_eq!(driver.current_step(), 3);
    assert!(recorder.events.is_empty());
    assert!(recorder.snapshots.is_empty());
    assert_eq!(driver.statistics().total_arrivals, stats.total_arrivals);
}
