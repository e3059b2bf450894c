//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game plus the CSV summary.
    Jsonl,
    /// CSV summary only.
    Csv,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    Detailed,
}

/// Registered AI types selectable per seat.
#[derive(Debug, Clone, ValueEnum)]
pub enum AiType {
    House,
    Random,
}

impl AiType {
    /// Name in the engine's AI registry.
    pub fn name(&self) -> &'static str {
        match self {
            AiType::House => engine::ai::HousePlayer::NAME,
            AiType::Random => engine::ai::RandomPlayer::NAME,
        }
    }
}
