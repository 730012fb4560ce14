//! Ride requests and where they come from
//!
//! # Overview
//!
//! - **ArrivalSource**: biased coin deciding whether a request appears at a step
//! - **Request**: source floor, destination floor and arrival time of one ride
//! - **RequestQueue**: FIFO of requests waiting for an elevator
//! - **RandomSource**: the injectable randomness behind arrivals and floor draws
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::requests::*;
//!
//! let arrivals = ArrivalSource::new(1.0)?;
//! let mut rng = RngSource::seeded(42);
//! let mut queue = RequestQueue::new();
//!
//! if arrivals.request_arrived(&mut rng) {
//!     let request = Request::generate(10, &mut rng)?.with_arrival_time(1);
//!     queue.enqueue(request);
//! }
//! assert_eq!(queue.len(), 1);
//! # Ok::<(), elevator_dispatch_sim::SimulationError>(())
//! ```

pub mod arrival;
pub mod queue;
pub mod random;
pub mod request;

pub use arrival::ArrivalSource;
pub use queue::RequestQueue;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use request::Request;
