use crate::config::evolution::OUTPUT_LEN;
use crate::engines::generation::chromosome::Chromosome;

/// Counted accumulator of accepted chromosomes.
///
/// Every acceptance is counted toward `required`, duplicates included, but
/// only the first `OUTPUT_LEN` are stored since nothing later is ever read.
#[derive(Debug, Clone)]
pub struct AnswerSet {
    kept: Vec<Chromosome>,
    accepted: usize,
    required: usize,
}

impl AnswerSet {
    pub fn new(required: usize) -> Self {
        Self {
            kept: Vec::with_capacity(OUTPUT_LEN),
            accepted: 0,
            required,
        }
    }

    pub fn push(&mut self, chromosome: Chromosome) {
        if self.kept.len() < OUTPUT_LEN {
            self.kept.push(chromosome);
        }
        self.accepted += 1;
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn is_satisfied(&self) -> bool {
        self.accepted >= self.required
    }

    pub fn kept(&self) -> &[Chromosome] {
        &self.kept
    }

    /// The first `OUTPUT_LEN` answers as integers, or `None` if fewer were
    /// accepted.
    pub fn to_output(&self) -> Option<[u16; OUTPUT_LEN]> {
        if self.kept.len() < OUTPUT_LEN {
            return None;
        }
        let mut out = [0u16; OUTPUT_LEN];
        for (slot, chromosome) in out.iter_mut().zip(&self.kept) {
            *slot = chromosome.value();
        }
        Some(out)
    }
}
