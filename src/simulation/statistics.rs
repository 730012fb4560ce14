//! Statistics collection and reporting
//!
//! This module contains the aggregate metrics of one run and their rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Aggregate metrics of one simulation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// Number of requests that arrived
    pub total_arrivals: u64,
    /// Number of requests whose source floor was reached
    pub total_requests_served: u64,
    /// Number of requests whose destination floor was reached
    pub total_requests_completed: u64,
    /// Sum of wait times over all served requests
    pub total_wait_time: u64,
    /// Longest single wait time
    pub max_wait_time: u64,
    /// Largest number of requests waiting in the queue at once
    pub peak_queue_length: usize,
    /// Requests still queued when the run ended
    pub requests_waiting: usize,
    /// Requests still assigned to an elevator when the run ended
    pub requests_in_service: usize,
    /// Number of time steps simulated
    pub steps_simulated: u64,
    /// Wall-clock duration of the run
    pub simulation_duration: Duration,
}

impl SimulationStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a request arrival
    pub fn record_arrival(&mut self) {
        self.total_arrivals += 1;
    }

    /// Count a pick-up and its wait time
    pub fn record_pickup(&mut self, wait_time: u64) {
        self.total_requests_served += 1;
        self.total_wait_time += wait_time;
        self.max_wait_time = self.max_wait_time.max(wait_time);
    }

    /// Count a drop-off
    pub fn record_dropoff(&mut self) {
        self.total_requests_completed += 1;
    }

    /// Track the queue length after arrivals are processed
    pub fn observe_queue_length(&mut self, length: usize) {
        self.peak_queue_length = self.peak_queue_length.max(length);
    }

    /// Set the wall-clock duration of the run
    pub fn set_simulation_duration(&mut self, duration: Duration) {
        self.simulation_duration = duration;
    }

    /// Mean wait time over served requests, or 0.0 when none were served
    pub fn average_wait_time(&self) -> f64 {
        if self.total_requests_served == 0 {
            0.0
        } else {
            self.total_wait_time as f64 / self.total_requests_served as f64
        }
    }

    /// Average wait time with two decimals, "0.00" when none were served
    pub fn formatted_average_wait_time(&self) -> String {
        format!("{:.2}", self.average_wait_time())
    }

    /// Share of arrivals that were picked up, in percent
    pub fn served_percentage(&self) -> f64 {
        if self.total_arrivals == 0 {
            0.0
        } else {
            (self.total_requests_served as f64 / self.total_arrivals as f64) * 100.0
        }
    }

    /// Render the end-of-run result block
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();
        report.push_str("Elevator Results:\n");
        report.push_str(&format!("Total Wait Time: {}\n", self.total_wait_time));
        report.push_str(&format!("Total Requests: {}\n", self.total_requests_served));
        report.push_str(&format!("Average Wait Time: {}\n", self.formatted_average_wait_time()));
        report
    }

    /// Render the extended metrics that the result block leaves out
    pub fn generate_detailed_report(&self) -> String {
        let mut report = self.generate_summary_report();
        report.push('\n');
        report.push_str(&format!("Steps Simulated: {}\n", self.steps_simulated));
        report.push_str(&format!("Requests Arrived: {}\n", self.total_arrivals));
        report.push_str(&format!(
            "Requests Served: {} ({:.1}%)\n",
            self.total_requests_served,
            self.served_percentage()
        ));
        report.push_str(&format!("Requests Completed: {}\n", self.total_requests_completed));
        report.push_str(&format!("Maximum Wait Time: {}\n", self.max_wait_time));
        report.push_str(&format!("Peak Queue Length: {}\n", self.peak_queue_length));
        report.push_str(&format!(
            "Still Waiting / In Service: {} / {}\n",
            self.requests_waiting, self.requests_in_service
        ));
        report.push_str(&format!(
            "Simulation Duration: {:.3} seconds\n",
            self.simulation_duration.as_secs_f64()
        ));
        report
    }

    /// One-line summary for log output
    pub fn generate_compact_summary(&self) -> String {
        format!(
            "{} steps, {} arrivals, {} served, avg wait {}",
            self.steps_simulated,
            self.total_arrivals,
            self.total_requests_served,
            self.formatted_average_wait_time()
        )
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics_report_zero_average() {
        let stats = SimulationStatistics::new();
        assert_eq!(stats.average_wait_time(), 0.0);
        assert_eq!(stats.formatted_average_wait_time(), "0.00");
        assert_eq!(stats.served_percentage(), 0.0);
    }

    #[test]
    fn test_record_pickups() {
        let mut stats = SimulationStatistics::new();
        stats.record_pickup(2);
        stats.record_pickup(5);
        stats.record_pickup(0);

        assert_eq!(stats.total_requests_served, 3);
        assert_eq!(stats.total_wait_time, 7);
        assert_eq!(stats.max_wait_time, 5);
        assert_eq!(stats.formatted_average_wait_time(), "2.33");
    }

    #[test]
    fn test_peak_queue_length() {
        let mut stats = SimulationStatistics::new();
        for length in [1, 4, 2, 0] {
            stats.observe_queue_length(length);
        }
        assert_eq!(stats.peak_queue_length, 4);
    }

    #[test]
    fn test_summary_report_format() {
        let mut stats = SimulationStatistics::new();
        stats.record_pickup(2);

        assert_eq!(
            stats.generate_summary_report(),
            "Elevator Results:\nTotal Wait Time: 2\nTotal Requests: 1\nAverage Wait Time: 2.00\n"
        );
        assert_eq!(stats.to_string(), stats.generate_summary_report());
    }

    #[test]
    fn test_detailed_report_contains_extended_metrics() {
        let mut stats = SimulationStatistics::new();
        stats.record_arrival();
        stats.record_arrival();
        stats.record_pickup(4);
        stats.record_dropoff();
        stats.steps_simulated = 12;

        let report = stats.generate_detailed_report();
        assert!(report.starts_with("Elevator Results:"));
        assert!(report.contains("Requests Served: 1 (50.0%)"));
        assert!(report.contains("Maximum Wait Time: 4"));
        assert!(report.contains("Steps Simulated: 12"));
    }

    #[test]
    fn test_compact_summary() {
        let mut stats = SimulationStatistics::new();
        stats.steps_simulated = 5;
        assert_eq!(stats.generate_compact_summary(), "5 steps, 0 arrivals, 0 served, avg wait 0.00");
    }

    #[test]
    fn test_serialization() {
        let mut stats = SimulationStatistics::new();
        stats.record_pickup(3);
        let json = serde_json::to_string(&stats).unwrap();
        let parsed: SimulationStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_wait_time, 3);
        assert_eq!(parsed.total_requests_served, 1);
    }
}
