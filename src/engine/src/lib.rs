pub mod generator;
pub mod geometry;
pub mod pitch;
pub mod playback;
pub mod roles;
pub mod summary;

pub use generator::{generate, FrameSnapshot, PlayerMarker, Team};
pub use geometry::{
    defensive_line, distance, pressure_set, DefensiveLine, FrameMetrics, LineGap,
    INTENSE_PRESSURE_RADIUS, PRESSURE_RADIUS,
};
pub use pitch::PitchSpace;
pub use playback::{timecode, Playback, FRAMES_PER_SECOND, FRAME_STEP, TICK_INTERVAL_MS};
pub use roles::{role_slot, RoleSlot, AWAY_ROLES, HOME_ROLES, MAX_PLAYERS_PER_TEAM, Y_SLOTS};
pub use summary::{AnalysisSummary, PlayerTracking};
