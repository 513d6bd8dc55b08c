use super::evolution_engine::ProgressCallback;

/// Reports generation summaries through the `log` facade.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: i32, accepted: usize) {
        log::debug!(
            "Generation {} complete. Best score: {}, answers accepted: {}",
            generation + 1, best_score, accepted
        );
    }
}

/// No-op callback.
impl ProgressCallback for () {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best_score: i32, _accepted: usize) {}
}

// For callers consuming progress on another thread
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best_score: i32, accepted: usize },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: i32, accepted: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_score,
            accepted,
        });
    }
}
