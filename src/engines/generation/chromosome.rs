//! A 16-bit candidate solution.
//!
//! Bits are indexed from the most significant end: index 0 is the left-most
//! character of the binary form, so "the first 8 bits" is the high byte.
//! All operations return a new value; a `Chromosome` is never edited in place.
use crate::config::evolution::CHROMOSOME_BITS;
use crate::error::GeneratorError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Chromosome(u16);

impl Chromosome {
    pub const BITS: usize = CHROMOSOME_BITS;

    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Sixteen independent fair coin flips.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let value = (0..Self::BITS).fold(0u16, |acc, _| (acc << 1) | u16::from(rng.gen::<bool>()));
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    pub fn get(self, index: usize) -> bool {
        self.0 & Self::mask(index) != 0
    }

    pub fn set(self, index: usize, bit: bool) -> Self {
        if bit {
            Self(self.0 | Self::mask(index))
        } else {
            Self(self.0 & !Self::mask(index))
        }
    }

    pub fn flip(self, index: usize) -> Self {
        Self(self.0 ^ Self::mask(index))
    }

    /// Bits `0..at` from `self`, bits `at..16` from `other`.
    pub fn splice(self, other: Chromosome, at: usize) -> Self {
        assert!(at <= Self::BITS, "splice point {} out of range", at);
        let tail = if at == Self::BITS { 0 } else { u16::MAX >> at };
        Self((self.0 & !tail) | (other.0 & tail))
    }

    fn mask(index: usize) -> u16 {
        assert!(index < Self::BITS, "bit index {} out of range", index);
        1 << (Self::BITS - 1 - index)
    }
}

impl From<u16> for Chromosome {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Chromosome> for u16 {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.0
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

impl FromStr for Chromosome {
    type Err = GeneratorError;

    /// Parses exactly sixteen `0`/`1` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::BITS || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(GeneratorError::Parse(format!(
                "Chromosome must be {} binary digits, got {:?}",
                Self::BITS, s
            )));
        }
        u16::from_str_radix(s, 2)
            .map(Self)
            .map_err(|e| GeneratorError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_indexing_starts_at_msb() {
        let c: Chromosome = "1000000000000001".parse().unwrap();
        assert_eq!(c.value(), 0x8001);
        assert!(c.get(0));
        assert!(c.get(15));
        assert!(!c.get(7));
    }

    #[test]
    fn test_set_and_flip_return_new_values() {
        let c = Chromosome::new(0);
        let with_bit = c.set(3, true);
        assert_eq!(c.value(), 0, "original untouched");
        assert_eq!(with_bit.value(), 0x1000);
        assert_eq!(with_bit.set(3, false), c);
        assert_eq!(with_bit.flip(3), c);
        assert_eq!(c.flip(15).value(), 1);
    }

    #[test]
    fn test_splice() {
        let a = Chromosome::new(0xABCD);
        let b = Chromosome::new(0x1234);
        assert_eq!(a.splice(b, 8).value(), 0xAB34);
        assert_eq!(a.splice(b, 0), b);
        assert_eq!(a.splice(b, 16), a);
        assert_eq!(a.splice(b, 4).value(), 0xA234);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let c = Chromosome::new(0x00F0);
        assert_eq!(c.to_string(), "0000000011110000");
        assert_eq!(c.to_string().parse::<Chromosome>().unwrap(), c);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!("101".parse::<Chromosome>(), Err(GeneratorError::Parse(_))));
        assert!("000000000000000x".parse::<Chromosome>().is_err());
        assert!("+000000000000001".parse::<Chromosome>().is_err());
        assert!("00000000000000000".parse::<Chromosome>().is_err());
    }

    #[test]
    fn test_random_covers_both_bit_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples: Vec<Chromosome> = (0..64).map(|_| Chromosome::random(&mut rng)).collect();
        for index in 0..Chromosome::BITS {
            assert!(samples.iter().any(|c| c.get(index)), "bit {} never set", index);
            assert!(samples.iter().any(|c| !c.get(index)), "bit {} always set", index);
        }
    }
}
