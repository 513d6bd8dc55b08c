use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Search exhausted after {generations} generations: accepted {accepted} of {required} answers")]
    Exhausted {
        generations: usize,
        accepted: usize,
        required: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
