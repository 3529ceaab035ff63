use serde::{Deserialize, Serialize};

use crate::domain::state::{Player, PlayerId, ScoreEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: u32,
    pub player_id: PlayerId,
    pub name: String,
    pub score: i32,
}

/// One row of a player's round-by-round breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLine {
    pub round: u8,
    pub round_score: i32,
    pub running_total: i32,
}

/// Rank players by score, highest first.
///
/// Ties share a rank and the next rank skips (1, 1, 3). Tied players keep
/// roster order.
pub fn compute_standings(players: &[Player]) -> Vec<Standing> {
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| b.score.cmp(&a.score));

    let mut standings = Vec::with_capacity(ordered.len());
    let mut prev: Option<(i32, u32)> = None;
    for (idx, player) in ordered.into_iter().enumerate() {
        let rank = match prev {
            Some((score, rank)) if score == player.score => rank,
            _ => idx as u32 + 1,
        };
        prev = Some((player.score, rank));
        standings.push(Standing {
            rank,
            player_id: player.id,
            name: player.name.clone(),
            score: player.score,
        });
    }
    standings
}

pub fn round_breakdown(history: &[ScoreEntry]) -> Vec<RoundLine> {
    history
        .iter()
        .scan(0i32, |total, entry| {
            // Each partial sum was once a player's credited total, so it fits.
            *total = total.saturating_add(entry.round_score);
            Some(RoundLine {
                round: entry.round,
                round_score: entry.round_score,
                running_total: *total,
            })
        })
        .collect()
}
