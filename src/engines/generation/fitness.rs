use crate::engines::generation::chromosome::Chromosome;
use rayon::prelude::*;

/// Fitness of a chromosome against a target set-bit count.
///
/// With `k` set bits the score is `k` while `k <= set` and `set - k` once `k`
/// overshoots. Overshooting therefore scores negative, below every
/// undershooting chromosome, and sorting relies on that ordering.
pub fn score(chromosome: Chromosome, set: u32) -> i32 {
    let k = chromosome.popcount() as i32;
    let set = set as i32;
    if k <= set {
        k
    } else {
        set - k
    }
}

/// Accepted when `0 < popcount <= set`. The all-zero chromosome never is.
pub fn is_answer(chromosome: Chromosome, set: u32) -> bool {
    let k = chromosome.popcount();
    k > 0 && k <= set
}

/// Score every chromosome, preserving population order.
pub fn evaluate_population(population: &[Chromosome], set: u32) -> Vec<(Chromosome, i32)> {
    population
        .par_iter()
        .map(|&chromosome| (chromosome, score(chromosome, set)))
        .collect()
}

/// Sort by descending score. Stable: equal scores keep their prior order.
pub fn rank_by_fitness(population: &[Chromosome], set: u32) -> Vec<Chromosome> {
    let mut evaluated = evaluate_population(population, set);
    evaluated.sort_by(|a, b| b.1.cmp(&a.1));
    evaluated.into_iter().map(|(chromosome, _)| chromosome).collect()
}
