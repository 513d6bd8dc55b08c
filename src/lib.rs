pub mod config;
pub mod engines;
pub mod error;

pub use config::{AppConfig, ConfigManager, EvolutionConfig};
pub use engines::generation::{Chromosome, ChromosomeEngine, OUTPUT_LEN};
pub use error::{GeneratorError, Result};
