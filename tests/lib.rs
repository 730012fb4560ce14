// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use elevator_dispatch_sim::*;


mod driver_tests;

#[test]
fn test_core_id_types() {
    let run_id = RunId::new();
    assert_ne!(run_id, RunId::new());
    assert!(run_id.to_string().starts_with("RUN_"));

    let elevator_id = ElevatorId(3);
    assert_eq!(elevator_id.index(), 3);
    assert_eq!(elevator_id.to_string(), "ELEV_3");
}

#[test]
fn test_enum_types() {
    let phases = [ElevatorPhase::Idle, ElevatorPhase::MovingToSource, ElevatorPhase::MovingToDestination];

    for phase in &phases {
        assert!(!phase.to_string().is_empty());
        assert_eq!(ElevatorPhase::try_from(phase.code()).unwrap(), *phase);
    }

    assert!(matches!(ElevatorPhase::try_from(7u8), Err(SimulationError::InvalidParameter(_))));

    for format in [OutputFormat::Text, OutputFormat::Json] {
        assert!(!format.to_string().is_empty());
    }
}

#[test]
fn test_serialization_roundtrip() {
    let run_id = RunId::new();
    let json = serde_json::to_string(&run_id).unwrap();
    assert!(json.contains("RUN_"));
    let deserialized: RunId = serde_json::from_str(&json).unwrap();
    assert_eq!(run_id, deserialized);

    let request = Request::new(2, 9, 10).unwrap().with_arrival_time(4);
    let json: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(json["source_floor"], 2);
    assert_eq!(json["destination_floor"], 9);
    assert_eq!(json["arrival_time"], 4);
}

#[test]
fn test_error_messages() {
    let err = RequestQueue::new().dequeue().unwrap_err();
    assert_eq!(err.to_string(), "Request queue is empty");

    let err = ArrivalSource::new(-0.1).unwrap_err();
    assert!(err.to_string().starts_with("Invalid parameter"));
}
