use rand::rngs::StdRng;
use rand::SeedableRng;
use shortgen::config::traits::ConfigSection;
use shortgen::engines::generation::operators::{create_population, new_generation};
use shortgen::{ChromosomeEngine, EvolutionConfig, GeneratorError, OUTPUT_LEN};

fn engine(amount: usize, set: u32, seed: u64) -> ChromosomeEngine<StdRng> {
    ChromosomeEngine::with_rng(EvolutionConfig::new(amount, set), StdRng::seed_from_u64(seed))
        .expect("valid config")
}

#[test]
fn test_any_nonzero_value_accepted_when_set_is_16() {
    let values = engine(8, 16, 1).generate().unwrap();
    assert_eq!(values.len(), OUTPUT_LEN);
    assert!(values.iter().all(|&v| v >= 1));
}

#[test]
fn test_single_bit_outputs_are_powers_of_two() {
    for seed in 0..5 {
        let values = engine(8, 1, seed).generate().unwrap();
        for v in values {
            assert!(v.is_power_of_two(), "0x{:04X} has {} bits set", v, v.count_ones());
        }
    }
}

#[test]
fn test_outputs_respect_set_bound() {
    for set in [2, 3, 5, 8] {
        let values = engine(20, set, u64::from(set)).generate().unwrap();
        for v in values {
            assert!(v.count_ones() >= 1 && v.count_ones() <= set);
        }
    }
}

#[test]
fn test_zero_set_is_a_configuration_error() {
    let result = ChromosomeEngine::new(EvolutionConfig::new(8, 0));
    assert!(matches!(result, Err(GeneratorError::Configuration(_))));
}

#[test]
fn test_small_amount_is_a_configuration_error() {
    for amount in 0..OUTPUT_LEN {
        let result = ChromosomeEngine::new(EvolutionConfig::new(amount, 1));
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }
}

#[test]
fn test_unbounded_search_still_finishes() {
    let mut config = EvolutionConfig::new(8, 1);
    config.max_generations = None;
    config.seed = Some(21);
    assert!(config.validate().is_ok());
    let values = ChromosomeEngine::new(config).unwrap().generate().unwrap();
    assert!(values.iter().all(|v| v.count_ones() == 1));
}

#[test]
fn test_generations_keep_population_size() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut population = create_population(200, &mut rng);
    for _ in 0..10 {
        population = new_generation(&population, 1, 30, 20, 50, &mut rng);
        assert_eq!(population.len(), 200);
    }
}
