//! Search-driver integration.
//!
//! [`Problem`] is the seam between this crate and a metaheuristic
//! framework (local search, SA, GA, ...). A driver only needs to score
//! candidates and draw random ones; it may call either any number of
//! times in any order.
//!
//! [`SurgeryProblem`] implements it for the surgery scheduling model.

use std::path::Path;

use rand::Rng;

use crate::config::EvaluatorConfig;
use crate::error::{ConfigError, InstanceError};
use crate::evaluation::evaluate;
use crate::generator::random_solution;
use crate::models::{Evaluation, Instance, SurgerySchedule};
use crate::parser::load_instance;
use crate::validation::{validate_instance, ValidationResult};

/// Defines an optimization problem for an external search driver.
///
/// # Minimization
///
/// Lower scores are better.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` so a driver can evaluate candidates
/// from several threads. Each thread should bring its own RNG to
/// [`sample`](Problem::sample).
pub trait Problem: Send + Sync {
    /// The candidate solution type.
    type Solution: Clone + Send;

    /// Scores a candidate. Total: never panics on malformed input.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Draws a random, structurally valid candidate.
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Solution;
}

/// Surgery scheduling problem: a frozen instance plus scoring parameters.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_surgery::problem::{Problem, SurgeryProblem};
///
/// let text = "1 1 1\n0\n2\n60\n1\n0\n8\n8\n0\n";
/// let problem = SurgeryProblem::new(text.parse().unwrap());
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let candidate = problem.sample(&mut rng);
/// assert!(problem.evaluate(&candidate).is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct SurgeryProblem {
    instance: Instance,
    config: EvaluatorConfig,
}

impl SurgeryProblem {
    /// Wraps an instance with the default configuration.
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            config: EvaluatorConfig::default(),
        }
    }

    /// Loads an instance file.
    ///
    /// Validation issues are logged as warnings; they do not prevent
    /// loading, since infeasible instances can still be scored.
    ///
    /// # Errors
    /// Returns [`InstanceError`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let instance = load_instance(path)?;
        if let Err(errors) = validate_instance(&instance) {
            for e in &errors {
                tracing::warn!(kind = ?e.kind, "{}", e.message);
            }
        }
        Ok(Self::new(instance))
    }

    /// Replaces the scoring configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `config` fails [`EvaluatorConfig::validate`].
    pub fn with_config(mut self, config: EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The underlying instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The scoring configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Runs instance validation.
    pub fn validate(&self) -> ValidationResult {
        validate_instance(&self.instance)
    }

    /// Scores a candidate and returns the full violation breakdown.
    pub fn evaluate_detailed(&self, solution: &SurgerySchedule) -> Evaluation {
        evaluate(&self.instance, solution, &self.config)
    }

    /// Draws a random candidate from the thread-local RNG.
    pub fn sample_random(&self) -> SurgerySchedule {
        random_solution(&self.instance, &mut rand::rng())
    }
}

impl Problem for SurgeryProblem {
    type Solution = SurgerySchedule;

    fn evaluate(&self, solution: &SurgerySchedule) -> f64 {
        self.evaluate_detailed(solution).score()
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> SurgerySchedule {
        random_solution(&self.instance, rng)
    }
}
