use super::traits::ConfigSection;
use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};

/// Bits in every chromosome.
pub const CHROMOSOME_BITS: usize = 16;

/// Number of answers handed back by a run, regardless of `amount`.
pub const OUTPUT_LEN: usize = 8;

pub const MAX_POPULATION_SIZE: usize = 1_000_000;

/// Parameters for one chromosome search.
///
/// Retain shares are whole percentages so survivor counts are exact integer
/// floors of `population_size * percent / 100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Accepted answers to collect before the search stops.
    pub amount: usize,
    /// Upper bound on set bits; also the fitness optimum.
    pub set: u32,
    pub population_size: usize,
    pub graded_retain_percent: usize,
    pub nongraded_retain_percent: usize,
    /// A child is mutated when a roll in `0..100` is `<=` this value, so the
    /// chance is `(threshold + 1)%`: 0 still mutates 1% of children.
    pub mutation_threshold: u32,
    /// Safety cap on generations; `None` lets the search run until satisfied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_generations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            amount: 8,
            set: 1,
            population_size: 200,
            graded_retain_percent: 30,
            nongraded_retain_percent: 20,
            mutation_threshold: 50,
            max_generations: Some(10_000),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn new(amount: usize, set: u32) -> Self {
        Self {
            amount,
            set,
            ..Self::default()
        }
    }

    pub fn graded_count(&self) -> usize {
        self.population_size * self.graded_retain_percent / 100
    }

    pub fn nongraded_count(&self) -> usize {
        self.population_size * self.nongraded_retain_percent / 100
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        // set == 0 can never be satisfied: an answer needs 0 < popcount <= set
        if self.set == 0 || self.set as usize > CHROMOSOME_BITS {
            return Err(GeneratorError::Configuration(format!(
                "Set bit count must be between 1 and {}, got {}",
                CHROMOSOME_BITS, self.set
            )));
        }
        if self.amount < OUTPUT_LEN {
            return Err(GeneratorError::Configuration(format!(
                "Amount must be at least {}, got {}",
                OUTPUT_LEN, self.amount
            )));
        }
        if self.population_size < 10 || self.population_size > MAX_POPULATION_SIZE {
            return Err(GeneratorError::Configuration(format!(
                "Population size must be between 10 and {}",
                MAX_POPULATION_SIZE
            )));
        }
        if self.graded_retain_percent >= 100 || self.nongraded_retain_percent >= 100 {
            return Err(GeneratorError::Configuration(
                "Retain percentages must each be below 100".to_string()
            ));
        }
        if self.graded_retain_percent + self.nongraded_retain_percent >= 100 {
            return Err(GeneratorError::Configuration(
                "Retain percentages must sum to less than 100".to_string()
            ));
        }
        if self.graded_count() == 0 {
            return Err(GeneratorError::Configuration(
                "Graded retain percentage leaves no survivors".to_string()
            ));
        }
        if self.mutation_threshold > 99 {
            return Err(GeneratorError::Configuration(
                "Mutation threshold must be between 0 and 99".to_string()
            ));
        }
        if self.max_generations == Some(0) {
            return Err(GeneratorError::Configuration(
                "Generation cap must be positive when set".to_string()
            ));
        }
        Ok(())
    }
}
