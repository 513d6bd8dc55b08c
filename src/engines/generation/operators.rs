use crate::engines::generation::chromosome::Chromosome;
use crate::engines::generation::fitness::rank_by_fitness;
use rand::Rng;

/// Bit index where crossover switches from the first parent to the second.
pub const CROSSOVER_POINT: usize = Chromosome::BITS / 2;

/// Mutation rolls land in `0..MUTATION_ROLL_RANGE`.
pub const MUTATION_ROLL_RANGE: u32 = 100;

/// Generate random chromosome
pub fn create_chromosome<R: Rng>(rng: &mut R) -> Chromosome {
    Chromosome::random(rng)
}

pub fn create_population<R: Rng>(size: usize, rng: &mut R) -> Vec<Chromosome> {
    (0..size).map(|_| create_chromosome(rng)).collect()
}

/// Truncation selection with a random tail.
///
/// The top `floor(N * graded_percent / 100)` by score always survive. Then
/// `floor(N * nongraded_percent / 100)` more are drawn without replacement
/// from the rest. Graded survivors come first, followed by the draws in the
/// order they were made.
pub fn natural_selection<R: Rng>(
    population: &[Chromosome],
    set: u32,
    graded_percent: usize,
    nongraded_percent: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    let graded = population.len() * graded_percent / 100;
    let nongraded = population.len() * nongraded_percent / 100;

    let mut ranked = rank_by_fitness(population, set);
    let mut rest = ranked.split_off(graded.min(ranked.len()));
    let mut selected = ranked;

    for _ in 0..nongraded.min(rest.len()) {
        let pos = rng.gen_range(0..rest.len());
        selected.push(rest.remove(pos));
    }

    selected
}

/// Single-point crossover at the midpoint: high byte of `parent1`, low byte
/// of `parent2`.
pub fn crossover(parent1: Chromosome, parent2: Chromosome) -> Chromosome {
    parent1.splice(parent2, CROSSOVER_POINT)
}

/// Mutation: toggle one uniformly chosen bit
pub fn mutation<R: Rng>(chromosome: Chromosome, rng: &mut R) -> Chromosome {
    chromosome.flip(rng.gen_range(0..Chromosome::BITS))
}

/// Roll for mutation; `true` when the roll is at most `threshold`.
pub fn should_mutate<R: Rng>(threshold: u32, rng: &mut R) -> bool {
    rng.gen_range(0..MUTATION_ROLL_RANGE) <= threshold
}

/// Produce the next population: children bred from the survivors, followed
/// by the survivors themselves. Size is preserved.
pub fn new_generation<R: Rng>(
    population: &[Chromosome],
    set: u32,
    graded_percent: usize,
    nongraded_percent: usize,
    mutation_threshold: u32,
    rng: &mut R,
) -> Vec<Chromosome> {
    let survivors = natural_selection(population, set, graded_percent, nongraded_percent, rng);
    if survivors.is_empty() {
        return population.to_vec();
    }

    let target = population.len() - survivors.len();
    let mut next_generation = Vec::with_capacity(population.len());

    while next_generation.len() < target {
        // Parents are drawn with replacement, so self-crossover can happen
        let parent1 = survivors[rng.gen_range(0..survivors.len())];
        let parent2 = survivors[rng.gen_range(0..survivors.len())];

        let mut child = crossover(parent1, parent2);
        if should_mutate(mutation_threshold, rng) {
            child = mutation(child, rng);
        }
        next_generation.push(child);
    }

    next_generation.extend(survivors);
    next_generation
}
