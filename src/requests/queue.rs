//! FIFO holding area for requests not yet assigned to an elevator

use std::collections::VecDeque;

use super::request::Request;
use crate::simulation::{SimulationError, SimulationResult};

/// First-in first-out queue of waiting requests
///
/// Requests leave strictly in arrival order. There is no random access and no
/// reordering.
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    requests: VecDeque<Request>,
}

impl RequestQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request to the tail
    pub fn enqueue(&mut self, request: Request) {
        self.requests.push_back(request);
    }

    /// Remove and return the head; `EmptyQueue` when there is none
    pub fn dequeue(&mut self) -> SimulationResult<Request> {
        self.requests.pop_front().ok_or(SimulationError::EmptyQueue)
    }

    /// Whether no request is waiting
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Number of waiting requests
    pub fn len(&self) -> usize {
        self.requests.len()
    }
}
