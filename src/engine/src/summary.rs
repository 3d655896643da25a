use serde::{Deserialize, Serialize};

/// Read-only analysis summary produced by the external computer-vision
/// backend. Immutable for the lifetime of a viewing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub analysis_id: String,
    #[serde(default)]
    pub session_id: Option<u32>,
    pub total_frames: u32,
    pub player_tracking: PlayerTracking,
    pub ball_visibility_percentage: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerTracking {
    pub home_team_players: u32,
    pub away_team_players: u32,
}

impl AnalysisSummary {
    /// Short identifier for headers and file names.
    pub fn short_id(&self) -> &str {
        match self.analysis_id.char_indices().nth(8) {
            Some((idx, _)) => &self.analysis_id[..idx],
            None => &self.analysis_id,
        }
    }
}
