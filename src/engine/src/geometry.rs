use crate::generator::{FrameSnapshot, PlayerMarker, Team};
use itertools::Itertools;
use nalgebra::Vector2;

/// Radius around the ball within which a player counts as pressing.
pub const PRESSURE_RADIUS: f32 = 15.0;
/// Tighter ring used for the intense-pressure zone.
pub const INTENSE_PRESSURE_RADIUS: f32 = 10.0;

/// Number of players forming a defensive line.
const LINE_SIZE: usize = 4;

#[inline]
pub fn distance(a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    (a - b).magnitude()
}

/// Players strictly within `radius` meters of the ball.
pub fn pressure_set<'p>(
    players: impl IntoIterator<Item = &'p PlayerMarker>,
    ball: Vector2<f32>,
    radius: f32,
) -> Vec<&'p PlayerMarker> {
    players
        .into_iter()
        .filter(|p| distance(p.position, ball) < radius)
        .collect()
}

/// Gap between two adjacent defenders along the sorted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGap {
    pub from: PlayerMarker,
    pub to: PlayerMarker,
    pub distance: f32,
}

/// A team's last defensive line: the four players nearest their own
/// goal, ordered laterally so the connecting polyline cannot cross
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DefensiveLine {
    pub players: Vec<PlayerMarker>,
}

impl DefensiveLine {
    /// Mean depth of the line, used to anchor its label.
    pub fn avg_x(&self) -> f32 {
        let sum: f32 = self.players.iter().map(|p| p.position.x).sum();
        sum / self.players.len() as f32
    }

    /// Consecutive spacing along the lateral order.
    pub fn gaps(&self) -> Vec<LineGap> {
        self.players
            .iter()
            .tuple_windows()
            .map(|(from, to)| LineGap {
                from: *from,
                to: *to,
                distance: distance(from.position, to.position),
            })
            .collect()
    }
}

/// Extract a team's defensive line. Home defends the low-x goal, away
/// the high-x goal. Returns `None` with fewer than two players; the
/// caller skips the layer rather than failing.
pub fn defensive_line(players: &[PlayerMarker], team: Team) -> Option<DefensiveLine> {
    if players.len() < 2 {
        return None;
    }

    let mut by_depth: Vec<PlayerMarker> = players.to_vec();
    by_depth.sort_by(|a, b| match team {
        Team::Home => a.position.x.total_cmp(&b.position.x),
        Team::Away => b.position.x.total_cmp(&a.position.x),
    });

    let mut line: Vec<PlayerMarker> = by_depth.into_iter().take(LINE_SIZE).collect();
    line.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));

    Some(DefensiveLine { players: line })
}

/// Per-frame aggregates shown alongside the pitch. Recomputed from the
/// snapshot every render and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    pub pressing_players: usize,
    pub avg_ball_distance: Option<f32>,
    pub min_ball_distance: Option<f32>,
    pub home_players: usize,
    pub away_players: usize,
}

impl FrameMetrics {
    pub fn from_snapshot(snapshot: &FrameSnapshot) -> Self {
        let distances: Vec<f32> = snapshot
            .all_players()
            .map(|p| distance(p.position, snapshot.ball))
            .collect();

        let avg = if distances.is_empty() {
            None
        } else {
            Some(distances.iter().sum::<f32>() / distances.len() as f32)
        };
        let min = distances.iter().copied().min_by(f32::total_cmp);

        FrameMetrics {
            pressing_players: pressure_set(snapshot.all_players(), snapshot.ball, PRESSURE_RADIUS)
                .len(),
            avg_ball_distance: avg,
            min_ball_distance: min,
            home_players: snapshot.home.len(),
            away_players: snapshot.away.len(),
        }
    }
}
