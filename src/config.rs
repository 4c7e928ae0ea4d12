//! Evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default penalty per unit of violation (minute or headcount).
pub const DEFAULT_PENALTY_WEIGHT: f64 = 1e6;

/// Default objective value for a schedule with no end times.
pub const DEFAULT_EMPTY_MAKESPAN: f64 = 1e6;

/// Scoring parameters for [`evaluate`](crate::evaluation::evaluate).
///
/// The penalty weight must dominate any realistic makespan so that a
/// single violation always outranks a makespan improvement.
///
/// # Examples
///
/// ```
/// use u_surgery::config::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default()
///     .with_penalty_weight(1e4)
///     .with_empty_makespan(1e5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Penalty added per unit of violation magnitude.
    pub penalty_weight: f64,

    /// Objective substituted when the schedule has no end times.
    pub empty_makespan: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            penalty_weight: DEFAULT_PENALTY_WEIGHT,
            empty_makespan: DEFAULT_EMPTY_MAKESPAN,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_penalty_weight(mut self, weight: f64) -> Self {
        self.penalty_weight = weight;
        self
    }

    pub fn with_empty_makespan(mut self, makespan: f64) -> Self {
        self.empty_makespan = makespan;
        self
    }

    /// Checks that both parameters keep the score finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.penalty_weight.is_finite() || self.penalty_weight <= 0.0 {
            return Err(ConfigError::PenaltyWeight(self.penalty_weight));
        }
        if !self.empty_makespan.is_finite() || self.empty_makespan < 0.0 {
            return Err(ConfigError::EmptyMakespan(self.empty_makespan));
        }
        Ok(())
    }
}
