/// Positional template for one outfield role slot: center of the
/// lateral band the player patrols (meters from the home goal line)
/// and how far the synthetic jitter may push them from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleSlot {
    pub x_center: f32,
    pub x_spread: f32,
}

pub const MAX_PLAYERS_PER_TEAM: usize = 11;

// Slot order is a 4-3-3: GK, 4 defenders, 3 midfielders, 3 forwards.
pub const HOME_ROLES: [RoleSlot; MAX_PLAYERS_PER_TEAM] = [
    RoleSlot { x_center: 6.0, x_spread: 3.0 },
    RoleSlot { x_center: 22.0, x_spread: 10.0 },
    RoleSlot { x_center: 22.0, x_spread: 10.0 },
    RoleSlot { x_center: 22.0, x_spread: 10.0 },
    RoleSlot { x_center: 22.0, x_spread: 10.0 },
    RoleSlot { x_center: 42.0, x_spread: 18.0 },
    RoleSlot { x_center: 42.0, x_spread: 18.0 },
    RoleSlot { x_center: 42.0, x_spread: 18.0 },
    RoleSlot { x_center: 65.0, x_spread: 22.0 },
    RoleSlot { x_center: 65.0, x_spread: 22.0 },
    RoleSlot { x_center: 65.0, x_spread: 22.0 },
];

pub const AWAY_ROLES: [RoleSlot; MAX_PLAYERS_PER_TEAM] = [
    RoleSlot { x_center: 99.0, x_spread: 3.0 },
    RoleSlot { x_center: 83.0, x_spread: 10.0 },
    RoleSlot { x_center: 83.0, x_spread: 10.0 },
    RoleSlot { x_center: 83.0, x_spread: 10.0 },
    RoleSlot { x_center: 83.0, x_spread: 10.0 },
    RoleSlot { x_center: 63.0, x_spread: 18.0 },
    RoleSlot { x_center: 63.0, x_spread: 18.0 },
    RoleSlot { x_center: 63.0, x_spread: 18.0 },
    RoleSlot { x_center: 40.0, x_spread: 22.0 },
    RoleSlot { x_center: 40.0, x_spread: 22.0 },
    RoleSlot { x_center: 40.0, x_spread: 22.0 },
];

/// Lateral base position (touchline axis) per role slot, spreading the
/// back four and midfield across the width of the pitch.
pub const Y_SLOTS: [f32; MAX_PLAYERS_PER_TEAM] = [
    34.0, 10.0, 24.0, 44.0, 58.0, 18.0, 34.0, 50.0, 14.0, 34.0, 54.0,
];

const FALLBACK_ROLE: RoleSlot = RoleSlot { x_center: 52.0, x_spread: 20.0 };
const FALLBACK_Y: f32 = 34.0;

/// Role template and lateral slot for a player index. Indices past the
/// table fall back to a center-field band.
pub fn role_slot(roles: &[RoleSlot; MAX_PLAYERS_PER_TEAM], index: usize) -> (RoleSlot, f32) {
    let role = roles.get(index).copied().unwrap_or(FALLBACK_ROLE);
    let y = Y_SLOTS.get(index).copied().unwrap_or(FALLBACK_Y);
    (role, y)
}
