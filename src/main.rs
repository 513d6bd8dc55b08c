use anyhow::Context;
use shortgen::{ChromosomeEngine, ConfigManager, EvolutionConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional config file path; otherwise eight values with a single bit set
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let manager = ConfigManager::new();
            manager
                .load_from_file(&path)
                .with_context(|| format!("loading {}", path))?;
            manager.get().evolution
        }
        None => EvolutionConfig::new(8, 1),
    };

    let mut engine = ChromosomeEngine::new(config)?;
    let values = engine.generate()?;

    let line: Vec<String> = values.iter().map(|v| format!("0x{:04X}", v)).collect();
    println!("{}", line.join(" "));
    Ok(())
}
