use crate::roles::{role_slot, RoleSlot, AWAY_ROLES, HOME_ROLES, MAX_PLAYERS_PER_TEAM};
use crate::summary::AnalysisSummary;
use log::trace;
use nalgebra::Vector2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

/// One tracked player at one frame. Generated fresh per frame, never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerMarker {
    /// Jersey number, 1-based within the team.
    pub id: u8,
    pub team: Team,
    pub position: Vector2<f32>,
}

/// Complete spatial state for one frame index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub home: Vec<PlayerMarker>,
    pub away: Vec<PlayerMarker>,
    pub ball: Vector2<f32>,
}

impl FrameSnapshot {
    pub fn all_players(&self) -> impl Iterator<Item = &PlayerMarker> {
        self.home.iter().chain(self.away.iter())
    }
}

const AWAY_NOISE_OFFSET: u64 = 200;
const LATERAL_NOISE_OFFSET: u64 = 50;
const LATERAL_JITTER_RANGE: f64 = 16.0;

const PLAYER_X_BOUNDS: (f64, f64) = (2.0, 103.0);
const PLAYER_Y_BOUNDS: (f64, f64) = (2.0, 66.0);

/// Deterministic unit noise: fractional part of a scaled sine keyed by
/// seed and index. A pure function rather than a stateful PRNG so
/// repeated generation of the same frame is bit-identical.
fn unit_noise(seed: u64, index: u64) -> f64 {
    let x = ((seed + index * 9301 + 49297) as f64).sin() * 49297.0;
    x - x.floor()
}

/// Synthesize player and ball positions for a frame. Pure and total:
/// the same `(summary, frame)` always produces the same snapshot, so
/// scrubbing in either direction and re-rendering are idempotent.
///
/// True per-frame tracking coordinates are not available from the
/// analysis backend; positions are derived from role templates plus
/// per-frame jitter and only need to be visually plausible.
pub fn generate(summary: &AnalysisSummary, frame: u32) -> FrameSnapshot {
    let seed = u64::from(frame) * 7 + 13;

    let n_home = summary.player_tracking.home_team_players as usize;
    let n_away = summary.player_tracking.away_team_players as usize;

    let home = place_team(seed, &HOME_ROLES, n_home, Team::Home, 0);
    let away = place_team(seed, &AWAY_ROLES, n_away, Team::Away, AWAY_NOISE_OFFSET);

    // The ball stays inside the central band of the pitch.
    let ball_x = 20.0 + unit_noise(seed, 500 + u64::from(frame)) * 65.0;
    let ball_y = 10.0 + unit_noise(seed, 600 + u64::from(frame)) * 48.0;

    trace!(
        "frame {frame}: synthesized {} home and {} away markers",
        home.len(),
        away.len()
    );

    FrameSnapshot {
        home,
        away,
        ball: Vector2::new(ball_x as f32, ball_y as f32),
    }
}

fn place_team(
    seed: u64,
    roles: &[RoleSlot; MAX_PLAYERS_PER_TEAM],
    requested: usize,
    team: Team,
    noise_offset: u64,
) -> Vec<PlayerMarker> {
    let count = requested.min(MAX_PLAYERS_PER_TEAM);

    (0..count)
        .map(|i| {
            let (role, base_y) = role_slot(roles, i);

            let jitter_x = (unit_noise(seed, i as u64 + noise_offset) - 0.5)
                * f64::from(role.x_spread)
                * 2.0;
            let jitter_y = (unit_noise(seed, i as u64 + noise_offset + LATERAL_NOISE_OFFSET)
                - 0.5)
                * LATERAL_JITTER_RANGE;

            let x = (f64::from(role.x_center) + jitter_x)
                .clamp(PLAYER_X_BOUNDS.0, PLAYER_X_BOUNDS.1);
            let y = (f64::from(base_y) + jitter_y).clamp(PLAYER_Y_BOUNDS.0, PLAYER_Y_BOUNDS.1);

            PlayerMarker {
                id: i as u8 + 1,
                team,
                position: Vector2::new(x as f32, y as f32),
            }
        })
        .collect()
}
