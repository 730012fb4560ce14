//! Batch experiments
//!
//! This module runs the same configuration several times with consecutive seeds
//! and summarizes the spread of the results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::simulation::{SimulationDriver, SimulationResult, SimulationStatistics};
use crate::types::{RunId, SimulationConfig};

/// Result of one run inside a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Identifier the run logged under
    pub run_id: RunId,
    /// Seed the run used, `None` for entropy-seeded runs
    pub seed: Option<u64>,
    /// Final metrics of the run
    pub statistics: SimulationStatistics,
}

/// Aggregate over all runs of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// When the batch started
    pub started_at: DateTime<Utc>,
    /// Per-run results in run order
    pub runs: Vec<RunOutcome>,
    /// Mean of the per-run average wait times
    pub mean_average_wait: f64,
    /// Smallest per-run average wait time
    pub min_average_wait: f64,
    /// Largest per-run average wait time
    pub max_average_wait: f64,
    /// Mean number of requests served per run
    pub mean_requests_served: f64,
}

impl BatchSummary {
    /// Summarize a set of run outcomes
    pub fn from_runs(started_at: DateTime<Utc>, runs: Vec<RunOutcome>) -> Self {
        if runs.is_empty() {
            return Self {
                started_at,
                runs,
                mean_average_wait: 0.0,
                min_average_wait: 0.0,
                max_average_wait: 0.0,
                mean_requests_served: 0.0,
            };
        }

        let count = runs.len() as f64;
        let averages: Vec<f64> = runs.iter().map(|run| run.statistics.average_wait_time()).collect();
        let mean_average_wait = averages.iter().sum::<f64>() / count;
        let min_average_wait = averages.iter().copied().fold(f64::INFINITY, f64::min);
        let max_average_wait = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_requests_served =
            runs.iter().map(|run| run.statistics.total_requests_served as f64).sum::<f64>() / count;

        Self {
            started_at,
            runs,
            mean_average_wait,
            min_average_wait,
            max_average_wait,
            mean_requests_served,
        }
    }

    /// Number of runs in the batch
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Render the batch result block
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("Batch Results ({} runs):\n", self.run_count()));
        report.push_str(&format!("Started At: {}\n", self.started_at.format("%Y-%m-%d %H:%M:%S UTC")));
        report.push_str(&format!("Mean Average Wait Time: {:.2}\n", self.mean_average_wait));
        report.push_str(&format!(
            "Average Wait Time Range: {:.2} - {:.2}\n",
            self.min_average_wait, self.max_average_wait
        ));
        report.push_str(&format!("Mean Requests Served: {:.2}\n", self.mean_requests_served));
        report
    }
}

/// Runs `config.runs` independent simulations
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: SimulationConfig,
}

impl BatchRunner {
    /// Create a runner for a validated configuration
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Seed of run `index`: base seed plus index, or entropy without a base seed
    pub fn seed_for_run(&self, index: usize) -> Option<u64> {
        self.config.seed.map(|seed| seed.wrapping_add(index as u64))
    }

    /// Execute every run in order
    pub fn run(&self) -> SimulationResult<BatchSummary> {
        let started_at = Utc::now();
        info!("Starting batch of {} runs", self.config.runs);

        let mut outcomes = Vec::with_capacity(self.config.runs);
        for index in 0..self.config.runs {
            let seed = self.seed_for_run(index);
            let run_config = SimulationConfig { seed, runs: 1, ..self.config.clone() };

            let mut driver = SimulationDriver::new(run_config)?;
            let statistics = driver.run()?;
            outcomes.push(RunOutcome { run_id: driver.run_id(), seed, statistics });
        }

        let summary = BatchSummary::from_runs(started_at, outcomes);
        info!(
            "Batch finished: mean average wait {:.2} over {} runs",
            summary.mean_average_wait,
            summary.run_count()
        );
        Ok(summary)
    }
}
