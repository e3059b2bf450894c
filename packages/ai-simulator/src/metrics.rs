//! Metrics collection and output for AI simulation results.

use engine::domain::GameOutcome;
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    /// Hex-encoded 32-byte game seed.
    pub seed: String,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 4],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [i32; 4],
    pub outcome: GameOutcome,
    /// First place in the final standings.
    pub winner: u8,
    pub rounds_played: usize,
    pub redeals: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u16,
    pub bid_winner: u8,
    pub bid: u16,
    pub trump: String,
    pub walkover: bool,
    pub bid_made: bool,
    pub round_scores: [u16; 4],
    pub deltas: [i32; 4],
    pub scores: [i32; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub final_score: i32,
    pub position: u8,
    pub contracts: ContractStats,
    pub avg_round_points: f64,
    /// Points banked as a non-bidder over the whole game.
    pub non_bid_points: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContractStats {
    pub won: u32,
    pub made: u32,
    pub failed: u32,
    pub walkovers: u32,
    pub made_pct: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: &[u8; 32],
    ai_types: [String; 4],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let player_metrics = (0..4u8)
        .map(|seat| build_player_metrics(seat, &ai_types[seat as usize], result))
        .collect();

    let rounds = match level {
        MetricsLevel::Basic => Vec::new(),
        MetricsLevel::Detailed => result.rounds.iter().map(build_round_metrics).collect(),
    };

    GameMetrics {
        game_id,
        seed: hex::encode(seed),
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores,
            outcome: result.outcome,
            winner: result.standings.first().map(|s| s.seat).unwrap_or(0),
            rounds_played: result.rounds.len(),
            redeals: result.redeals,
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &engine::domain::RoundSettlement) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        bid_winner: round.bid_winner,
        bid: round.bid,
        trump: round.trump.to_string(),
        walkover: round.walkover,
        bid_made: round.bid_made,
        round_scores: round.seats.each_ref().map(|s| s.round_score),
        deltas: round.seats.each_ref().map(|s| s.delta),
        scores: round.seats.each_ref().map(|s| s.score),
    }
}

fn build_player_metrics(seat: u8, ai_type: &str, result: &GameResult) -> PlayerMetrics {
    let mut contracts = ContractStats::default();
    let mut non_bid_points = 0;
    let mut round_points = 0u32;

    for round in &result.rounds {
        let mine = &round.seats[seat as usize];
        round_points += u32::from(mine.round_score);
        if round.bid_winner == seat {
            contracts.won += 1;
            if round.walkover {
                contracts.walkovers += 1;
            }
            if round.bid_made {
                contracts.made += 1;
            } else {
                contracts.failed += 1;
            }
        } else {
            non_bid_points += mine.delta;
        }
    }
    if contracts.won > 0 {
        contracts.made_pct = f64::from(contracts.made) / f64::from(contracts.won) * 100.0;
    }

    let avg_round_points = if result.rounds.is_empty() {
        0.0
    } else {
        f64::from(round_points) / result.rounds.len() as f64
    };

    let position = result
        .standings
        .iter()
        .find(|s| s.seat == seat)
        .map(|s| s.position)
        .unwrap_or(0);

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        final_score: result.final_scores[seat as usize],
        position,
        contracts,
        avg_round_points,
        non_bid_points,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: String,
    pub winner: u8,
    pub rounds: usize,
    pub seat0_score: i32,
    pub seat1_score: i32,
    pub seat2_score: i32,
    pub seat3_score: i32,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let scores = metrics.result.final_scores;
        let ai = &metrics.config.ai_types;
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed.clone(),
            winner: metrics.result.winner,
            rounds: metrics.result.rounds_played,
            seat0_score: scores[0],
            seat1_score: scores[1],
            seat2_score: scores[2],
            seat3_score: scores[3],
            seat0_ai: ai[0].clone(),
            seat1_ai: ai[1].clone(),
            seat2_ai: ai[2].clone(),
            seat3_ai: ai[3].clone(),
        }
    }
}
