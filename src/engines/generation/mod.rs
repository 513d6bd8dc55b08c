pub mod chromosome;
pub mod fitness;
pub mod operators;
pub mod answers;
pub mod progress;
pub mod evolution_engine;

pub use chromosome::Chromosome;
pub use answers::AnswerSet;
pub use evolution_engine::{ChromosomeEngine, ProgressCallback};
pub use progress::{LogProgressCallback, ChannelProgressCallback, ProgressMessage};
pub use crate::config::evolution::OUTPUT_LEN;
