use crate::config::evolution::{EvolutionConfig, OUTPUT_LEN};
use crate::config::traits::ConfigSection;
use crate::engines::generation::{
    answers::AnswerSet,
    chromosome::Chromosome,
    fitness::{evaluate_population, is_answer},
    operators,
    progress::LogProgressCallback,
};
use crate::error::GeneratorError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_score: i32, accepted: usize);
}

/// Genetic search for 16-bit values with between 1 and `set` bits set.
///
/// The engine owns its random source and configuration. Population and
/// answers live only for the duration of one `generate` call, so repeated
/// calls are independent searches drawing from the same generator.
pub struct ChromosomeEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    rng: R,
}

impl ChromosomeEngine<StdRng> {
    /// Seeds from `config.seed` when present, otherwise from OS entropy.
    pub fn new(config: EvolutionConfig) -> Result<Self, GeneratorError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ChromosomeEngine<R> {
    pub fn with_rng(config: EvolutionConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn create_population(&mut self) -> Vec<Chromosome> {
        operators::create_population(self.config.population_size, &mut self.rng)
    }

    pub fn natural_selection(&mut self, population: &[Chromosome]) -> Vec<Chromosome> {
        operators::natural_selection(
            population,
            self.config.set,
            self.config.graded_retain_percent,
            self.config.nongraded_retain_percent,
            &mut self.rng,
        )
    }

    pub fn new_generation(&mut self, population: &[Chromosome]) -> Vec<Chromosome> {
        operators::new_generation(
            population,
            self.config.set,
            self.config.graded_retain_percent,
            self.config.nongraded_retain_percent,
            self.config.mutation_threshold,
            &mut self.rng,
        )
    }

    /// Run a search and return the first `OUTPUT_LEN` accepted values.
    pub fn generate(&mut self) -> Result<[u16; OUTPUT_LEN], GeneratorError> {
        self.generate_with_progress(LogProgressCallback)
    }

    pub fn generate_with_progress<C: ProgressCallback>(
        &mut self,
        mut callback: C,
    ) -> Result<[u16; OUTPUT_LEN], GeneratorError> {
        let set = self.config.set;
        log::info!(
            "Searching for {} answers with at most {} bits set (population {})",
            self.config.amount, set, self.config.population_size
        );

        let mut population = self.create_population();
        let mut answers = AnswerSet::new(self.config.amount);
        let mut generation = 0;

        while !answers.is_satisfied() {
            if let Some(cap) = self.config.max_generations {
                if generation >= cap {
                    log::warn!(
                        "Stopping after {} generations with {}/{} answers",
                        generation, answers.accepted(), answers.required()
                    );
                    return Err(GeneratorError::Exhausted {
                        generations: generation,
                        accepted: answers.accepted(),
                        required: answers.required(),
                    });
                }
            }

            callback.on_generation_start(generation);

            population = self.new_generation(&population);

            let evaluated = evaluate_population(&population, set);
            for (chromosome, _) in &evaluated {
                if is_answer(*chromosome, set) {
                    answers.push(*chromosome);
                }
            }

            let best_score = evaluated.iter().map(|(_, s)| *s).max().unwrap_or(0);
            callback.on_generation_complete(generation, best_score, answers.accepted());

            generation += 1;
        }

        log::info!(
            "Accepted {} answers after {} generations",
            answers.accepted(), generation
        );

        // amount >= OUTPUT_LEN is validated, so a satisfied set always holds
        // OUTPUT_LEN answers; report the impossible case as a short search.
        answers.to_output().ok_or(GeneratorError::Exhausted {
            generations: generation,
            accepted: answers.accepted(),
            required: OUTPUT_LEN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::progress::{ChannelProgressCallback, ProgressMessage};

    fn seeded(amount: usize, set: u32, seed: u64) -> ChromosomeEngine {
        let mut config = EvolutionConfig::new(amount, set);
        config.seed = Some(seed);
        ChromosomeEngine::new(config).unwrap()
    }

    #[test]
    fn test_construction_validates() {
        assert!(ChromosomeEngine::new(EvolutionConfig::new(8, 0)).is_err());
        assert!(ChromosomeEngine::new(EvolutionConfig::new(4, 1)).is_err());
        assert!(ChromosomeEngine::with_rng(EvolutionConfig::new(8, 17), StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = seeded(8, 2, 99).generate().unwrap();
        let b = seeded(8, 2, 99).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_population_stays_fixed_size() {
        let mut engine = seeded(8, 3, 11);
        let mut population = engine.create_population();
        for _ in 0..25 {
            population = engine.new_generation(&population);
            assert_eq!(population.len(), 200);
        }
    }

    #[test]
    fn test_progress_reported_per_generation() {
        let (sender, receiver) = std::sync::mpsc::channel();
        let mut engine = seeded(8, 16, 5);
        engine.generate_with_progress(ChannelProgressCallback::new(sender)).unwrap();

        let messages: Vec<ProgressMessage> = receiver.try_iter().collect();
        assert_eq!(messages.first(), Some(&ProgressMessage::GenerationStart(0)));
        assert!(matches!(
            messages.last(),
            Some(ProgressMessage::GenerationComplete { accepted, .. }) if *accepted >= 8
        ));
    }

    #[test]
    fn test_generation_cap_reports_exhaustion() {
        // A large amount cannot be reached in a single generation of 200
        let mut config = EvolutionConfig::new(1_000_000, 1);
        config.seed = Some(3);
        config.max_generations = Some(1);
        let mut engine = ChromosomeEngine::new(config).unwrap();

        match engine.generate_with_progress(()) {
            Err(GeneratorError::Exhausted { generations, required, accepted }) => {
                assert_eq!(generations, 1);
                assert_eq!(required, 1_000_000);
                assert!(accepted <= 200);
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }
}
