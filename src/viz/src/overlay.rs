use crate::primitives::{Layer, LayerKind, Primitive, Scene, Style};
use engine::geometry::{defensive_line, distance, pressure_set, DefensiveLine};
use engine::{
    FrameSnapshot, PitchSpace, PlayerMarker, Team, INTENSE_PRESSURE_RADIUS, PRESSURE_RADIUS,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const GRASS_DARK: &str = "#1a472a";
const GRASS_LIGHT: &str = "#1e5631";
const CHALK: &str = "rgba(255,255,255,0.85)";
const CHALK_SOFT: &str = "rgba(255,255,255,0.7)";
const CHALK_BRIGHT: &str = "rgba(255,255,255,0.9)";

const HOME_FILL: &str = "#16a34a";
const HOME_STROKE: &str = "#15803d";
const HOME_ACCENT: &str = "#22c55e";
const HOME_PRESS: &str = "rgba(34,197,94,0.7)";
const AWAY_FILL: &str = "#dc2626";
const AWAY_STROKE: &str = "#b91c1c";
const AWAY_ACCENT: &str = "#ef4444";
const AWAY_PRESS: &str = "rgba(239,68,68,0.7)";

const BALL_FILL: &str = "#facc15";
const BALL_STROKE: &str = "#eab308";
const BALL_CORE: &str = "#fef08a";

const LABEL_BG: &str = "rgba(0,0,0,0.75)";
const LABEL_BG_SOFT: &str = "rgba(0,0,0,0.7)";
const GAP_LABEL_BG: &str = "rgba(0,0,0,0.65)";
const GAP_LABEL_FG: &str = "#fbbf24";

/// Which geometry layers are drawn over the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayType {
    Full,
    Pressure,
    Formation,
    Players,
}

impl OverlayType {
    pub fn shows_pressure(self) -> bool {
        matches!(self, OverlayType::Full | OverlayType::Pressure)
    }

    pub fn shows_formation(self) -> bool {
        matches!(self, OverlayType::Full | OverlayType::Formation)
    }
}

impl FromStr for OverlayType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "full" => Ok(OverlayType::Full),
            "pressure" => Ok(OverlayType::Pressure),
            "formation" => Ok(OverlayType::Formation),
            "players" => Ok(OverlayType::Players),
            other => Err(format!(
                "unknown overlay type '{other}' (expected full, pressure, formation or players)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    pub overlay: OverlayType,
    pub show_heat_map: bool,
    pub show_labels: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        OverlayOptions {
            overlay: OverlayType::Full,
            show_heat_map: false,
            show_labels: true,
        }
    }
}

/// Compose the full scene for one frame. Stateless: every layer is
/// derived from the snapshot alone, so toggling a layer never affects
/// the others.
pub fn render(snapshot: &FrameSnapshot, options: &OverlayOptions, pitch: &PitchSpace) -> Scene {
    let mut scene = Scene::new(pitch.view_width, pitch.view_height);

    scene.layers.push(pitch_layer(pitch));

    if options.show_heat_map {
        scene.layers.push(heat_layer(snapshot, pitch));
    }
    if options.overlay.shows_formation() {
        scene.layers.push(defensive_lines_layer(snapshot, pitch));
    }
    if options.overlay.shows_pressure() {
        scene.layers.push(pressure_layer(snapshot, pitch));
    }

    scene.layers.push(markers_layer(snapshot, options.show_labels, pitch));

    scene
}

fn pitch_layer(pitch: &PitchSpace) -> Layer {
    let pad = pitch.padding;
    let fw = pitch.field_width();
    let fh = pitch.field_height();

    let mut layer = Layer::new(LayerKind::PitchBase);

    layer.push(Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: pitch.view_width,
        height: pitch.view_height,
        rx: 6.0,
        style: Style {
            fill: Some(GRASS_DARK),
            ..Style::default()
        },
    });

    // Mowing stripes.
    for i in 0..10 {
        layer.push(Primitive::Rect {
            x: pad + i as f32 * (fw / 10.0),
            y: pad,
            width: fw / 10.0,
            height: fh,
            rx: 0.0,
            style: Style {
                fill: Some(if i % 2 == 0 { GRASS_LIGHT } else { GRASS_DARK }),
                ..Style::default()
            },
        });
    }

    layer.push(Primitive::Rect {
        x: pad,
        y: pad,
        width: fw,
        height: fh,
        rx: 0.0,
        style: Style {
            stroke: Some(CHALK),
            stroke_width: Some(2.0),
            ..Style::default()
        },
    });

    layer.push(Primitive::Line {
        x1: pad + fw / 2.0,
        y1: pad,
        x2: pad + fw / 2.0,
        y2: pad + fh,
        style: Style {
            stroke: Some(CHALK_SOFT),
            stroke_width: Some(1.5),
            ..Style::default()
        },
    });

    layer.push(Primitive::Circle {
        cx: pad + fw / 2.0,
        cy: pad + fh / 2.0,
        r: fh * 0.134,
        style: Style {
            stroke: Some(CHALK_SOFT),
            stroke_width: Some(1.5),
            ..Style::default()
        },
        blurred: false,
    });
    layer.push(Primitive::Circle {
        cx: pad + fw / 2.0,
        cy: pad + fh / 2.0,
        r: 3.0,
        style: Style {
            fill: Some(CHALK_SOFT),
            ..Style::default()
        },
        blurred: false,
    });

    // Penalty areas and six-yard boxes, both ends.
    for (x_area, x_box) in [
        (pad, pad),
        (pad + fw - fw * 0.157, pad + fw - fw * 0.052),
    ] {
        layer.push(Primitive::Rect {
            x: x_area,
            y: pad + fh * 0.211,
            width: fw * 0.157,
            height: fh * 0.578,
            rx: 0.0,
            style: Style {
                stroke: Some(CHALK_SOFT),
                stroke_width: Some(1.5),
                ..Style::default()
            },
        });
        layer.push(Primitive::Rect {
            x: x_box,
            y: pad + fh * 0.368,
            width: fw * 0.052,
            height: fh * 0.264,
            rx: 0.0,
            style: Style {
                stroke: Some(CHALK_SOFT),
                stroke_width: Some(1.5),
                ..Style::default()
            },
        });
    }

    // Goal mouths.
    for x in [pad - 4.0, pad + fw] {
        layer.push(Primitive::Rect {
            x,
            y: pad + fh * 0.434,
            width: 4.0,
            height: fh * 0.132,
            rx: 1.0,
            style: Style {
                fill: Some(CHALK_BRIGHT),
                ..Style::default()
            },
        });
    }

    layer
}

fn heat_layer(snapshot: &FrameSnapshot, pitch: &PitchSpace) -> Layer {
    let mut layer = Layer::with_opacity(LayerKind::HeatMap, 0.4);

    for player in snapshot.all_players() {
        layer.push(Primitive::Circle {
            cx: pitch.px(player.position.x),
            cy: pitch.py(player.position.y),
            r: 30.0,
            style: Style {
                fill: Some(match player.team {
                    Team::Home => HOME_ACCENT,
                    Team::Away => AWAY_ACCENT,
                }),
                ..Style::default()
            },
            blurred: true,
        });
    }

    layer
}

fn pressure_layer(snapshot: &FrameSnapshot, pitch: &PitchSpace) -> Layer {
    let mut layer = Layer::new(LayerKind::Pressure);
    let ball = snapshot.ball;
    let (bx, by) = (pitch.px(ball.x), pitch.py(ball.y));

    layer.push(Primitive::Circle {
        cx: bx,
        cy: by,
        r: pitch.scale(PRESSURE_RADIUS),
        style: Style {
            fill: Some("rgba(239,68,68,0.08)"),
            stroke: Some("rgba(239,68,68,0.3)"),
            stroke_width: Some(1.0),
            dash: Some("4 3"),
            ..Style::default()
        },
        blurred: false,
    });
    layer.push(Primitive::Circle {
        cx: bx,
        cy: by,
        r: pitch.scale(INTENSE_PRESSURE_RADIUS),
        style: Style {
            fill: Some("rgba(239,68,68,0.12)"),
            stroke: Some("rgba(239,68,68,0.4)"),
            stroke_width: Some(1.0),
            dash: Some("3 2"),
            ..Style::default()
        },
        blurred: false,
    });

    for player in pressure_set(snapshot.all_players(), ball, PRESSURE_RADIUS) {
        let d = distance(player.position, ball);
        let (px, py) = (pitch.px(player.position.x), pitch.py(player.position.y));
        let (mx, my) = ((px + bx) / 2.0, (py + by) / 2.0);

        layer.push(Primitive::Line {
            x1: px,
            y1: py,
            x2: bx,
            y2: by,
            style: Style {
                stroke: Some(match player.team {
                    Team::Home => HOME_PRESS,
                    Team::Away => AWAY_PRESS,
                }),
                stroke_width: Some(1.5),
                dash: Some("4 2"),
                ..Style::default()
            },
        });
        layer.push(Primitive::Rect {
            x: mx - 16.0,
            y: my - 8.0,
            width: 32.0,
            height: 16.0,
            rx: 3.0,
            style: Style {
                fill: Some(LABEL_BG),
                ..Style::default()
            },
        });
        layer.push(Primitive::Text {
            x: mx,
            y: my + 4.0,
            content: format!("{d:.1}m"),
            fill: "#fff",
            size: 9.0,
            weight: Some("600"),
            mono: true,
        });
    }

    layer
}

fn defensive_lines_layer(snapshot: &FrameSnapshot, pitch: &PitchSpace) -> Layer {
    let mut layer = Layer::new(LayerKind::DefensiveLines);

    let sides: [(&[PlayerMarker], Team, &'static str, &'static str); 2] = [
        (&snapshot.home, Team::Home, HOME_ACCENT, "Home Def. Line"),
        (&snapshot.away, Team::Away, AWAY_ACCENT, "Away Def. Line"),
    ];

    for (players, team, color, label) in sides {
        if let Some(line) = defensive_line(players, team) {
            push_line_overlay(&mut layer, &line, color, label, pitch);
        }
    }

    layer
}

fn push_line_overlay(
    layer: &mut Layer,
    line: &DefensiveLine,
    color: &'static str,
    label: &str,
    pitch: &PitchSpace,
) {
    let points: Vec<(f32, f32)> = line
        .players
        .iter()
        .map(|p| (pitch.px(p.position.x), pitch.py(p.position.y)))
        .collect();

    layer.push(Primitive::Polyline {
        points,
        style: Style {
            stroke: Some(color),
            stroke_width: Some(2.0),
            dash: Some("6 3"),
            opacity: Some(0.8),
            ..Style::default()
        },
    });

    let anchor_x = pitch.px(line.avg_x());
    let anchor_y = pitch.py(line.players[0].position.y);
    layer.push(Primitive::Rect {
        x: anchor_x - 32.0,
        y: anchor_y - 24.0,
        width: 64.0,
        height: 16.0,
        rx: 3.0,
        style: Style {
            fill: Some(LABEL_BG_SOFT),
            ..Style::default()
        },
    });
    layer.push(Primitive::Text {
        x: anchor_x,
        y: anchor_y - 12.0,
        content: label.to_string(),
        fill: "#fff",
        size: 9.0,
        weight: None,
        mono: true,
    });

    for gap in line.gaps() {
        let (fx, fy) = (pitch.px(gap.from.position.x), pitch.py(gap.from.position.y));
        let (tx, ty) = (pitch.px(gap.to.position.x), pitch.py(gap.to.position.y));
        let (mx, my) = ((fx + tx) / 2.0, (fy + ty) / 2.0);

        layer.push(Primitive::Line {
            x1: fx,
            y1: fy,
            x2: tx,
            y2: ty,
            style: Style {
                stroke: Some(color),
                stroke_width: Some(1.0),
                dash: Some("2 2"),
                opacity: Some(0.5),
                ..Style::default()
            },
        });
        layer.push(Primitive::Rect {
            x: mx - 14.0,
            y: my - 7.0,
            width: 28.0,
            height: 14.0,
            rx: 2.0,
            style: Style {
                fill: Some(GAP_LABEL_BG),
                ..Style::default()
            },
        });
        layer.push(Primitive::Text {
            x: mx,
            y: my + 3.0,
            content: format!("{:.1}m", gap.distance),
            fill: GAP_LABEL_FG,
            size: 8.0,
            weight: None,
            mono: true,
        });
    }
}

fn markers_layer(snapshot: &FrameSnapshot, show_labels: bool, pitch: &PitchSpace) -> Layer {
    let mut layer = Layer::new(LayerKind::Markers);

    for player in snapshot.all_players() {
        let (fill, stroke) = match player.team {
            Team::Home => (HOME_FILL, HOME_STROKE),
            Team::Away => (AWAY_FILL, AWAY_STROKE),
        };
        let (x, y) = (pitch.px(player.position.x), pitch.py(player.position.y));

        layer.push(Primitive::Circle {
            cx: x,
            cy: y,
            r: 10.0,
            style: Style {
                fill: Some(fill),
                stroke: Some(stroke),
                stroke_width: Some(2.0),
                ..Style::default()
            },
            blurred: false,
        });
        if show_labels {
            layer.push(Primitive::Text {
                x,
                y: y + 4.0,
                content: player.id.to_string(),
                fill: "#fff",
                size: 9.0,
                weight: Some("700"),
                mono: false,
            });
        }
    }

    let (bx, by) = (pitch.px(snapshot.ball.x), pitch.py(snapshot.ball.y));
    layer.push(Primitive::Circle {
        cx: bx,
        cy: by,
        r: 7.0,
        style: Style {
            fill: Some(BALL_FILL),
            stroke: Some(BALL_STROKE),
            stroke_width: Some(2.0),
            ..Style::default()
        },
        blurred: false,
    });
    layer.push(Primitive::Circle {
        cx: bx,
        cy: by,
        r: 3.0,
        style: Style {
            fill: Some(BALL_CORE),
            ..Style::default()
        },
        blurred: false,
    });

    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::summary::{AnalysisSummary, PlayerTracking};

    fn summary(home: u32, away: u32) -> AnalysisSummary {
        AnalysisSummary {
            analysis_id: "overlay-test".to_string(),
            session_id: None,
            total_frames: 500,
            player_tracking: PlayerTracking {
                home_team_players: home,
                away_team_players: away,
            },
            ball_visibility_percentage: 88.0,
        }
    }

    fn layer_kinds(scene: &Scene) -> Vec<LayerKind> {
        scene.layers.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn full_overlay_draws_every_layer_in_z_order() {
        let snapshot = engine::generate(&summary(11, 11), 0);
        let options = OverlayOptions {
            overlay: OverlayType::Full,
            show_heat_map: true,
            show_labels: true,
        };

        let scene = render(&snapshot, &options, &PitchSpace::default());

        assert_eq!(
            layer_kinds(&scene),
            vec![
                LayerKind::PitchBase,
                LayerKind::HeatMap,
                LayerKind::DefensiveLines,
                LayerKind::Pressure,
                LayerKind::Markers,
            ]
        );
    }

    #[test]
    fn players_overlay_draws_only_pitch_and_markers() {
        let snapshot = engine::generate(&summary(11, 11), 0);
        let options = OverlayOptions {
            overlay: OverlayType::Players,
            show_heat_map: false,
            show_labels: true,
        };

        let scene = render(&snapshot, &options, &PitchSpace::default());

        assert_eq!(
            layer_kinds(&scene),
            vec![LayerKind::PitchBase, LayerKind::Markers]
        );
    }

    #[test]
    fn pressure_overlay_excludes_formation_and_vice_versa() {
        let snapshot = engine::generate(&summary(11, 11), 3);
        let pitch = PitchSpace::default();

        let pressure = render(
            &snapshot,
            &OverlayOptions {
                overlay: OverlayType::Pressure,
                ..OverlayOptions::default()
            },
            &pitch,
        );
        let formation = render(
            &snapshot,
            &OverlayOptions {
                overlay: OverlayType::Formation,
                ..OverlayOptions::default()
            },
            &pitch,
        );

        assert!(pressure.layer(LayerKind::Pressure).is_some());
        assert!(pressure.layer(LayerKind::DefensiveLines).is_none());
        assert!(formation.layer(LayerKind::DefensiveLines).is_some());
        assert!(formation.layer(LayerKind::Pressure).is_none());
    }

    #[test]
    fn label_toggle_controls_jersey_numbers() {
        let snapshot = engine::generate(&summary(11, 11), 0);
        let pitch = PitchSpace::default();

        let with_labels = render(&snapshot, &OverlayOptions::default(), &pitch);
        let without_labels = render(
            &snapshot,
            &OverlayOptions {
                show_labels: false,
                ..OverlayOptions::default()
            },
            &pitch,
        );

        let texts = |scene: &Scene| {
            scene
                .layer(LayerKind::Markers)
                .unwrap()
                .primitives
                .iter()
                .filter(|p| matches!(p, Primitive::Text { .. }))
                .count()
        };

        assert_eq!(texts(&with_labels), 22);
        assert_eq!(texts(&without_labels), 0);
    }

    #[test]
    fn empty_away_team_skips_its_defensive_line_without_failing() {
        let snapshot = engine::generate(&summary(11, 0), 0);
        let options = OverlayOptions {
            overlay: OverlayType::Formation,
            ..OverlayOptions::default()
        };

        let scene = render(&snapshot, &options, &PitchSpace::default());

        let polylines = scene
            .layer(LayerKind::DefensiveLines)
            .unwrap()
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { .. }))
            .count();

        assert_eq!(polylines, 1);
    }

    #[test]
    fn markers_layer_always_contains_the_ball() {
        let snapshot = engine::generate(&summary(0, 0), 0);

        let scene = render(&snapshot, &OverlayOptions::default(), &PitchSpace::default());

        let circles = scene
            .layer(LayerKind::Markers)
            .unwrap()
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();

        assert_eq!(circles, 2);
    }

    #[test]
    fn pressure_rings_scale_with_the_viewport() {
        let snapshot = engine::generate(&summary(0, 0), 0);
        let pitch = PitchSpace::default();
        let options = OverlayOptions {
            overlay: OverlayType::Pressure,
            ..OverlayOptions::default()
        };

        let scene = render(&snapshot, &options, &pitch);
        let pressure = scene.layer(LayerKind::Pressure).unwrap();

        let radii: Vec<f32> = pressure
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { r, .. } => Some(*r),
                _ => None,
            })
            .collect();

        assert_eq!(radii.len(), 2);
        assert!((radii[0] - pitch.scale(15.0)).abs() < 1e-3);
        assert!((radii[1] - pitch.scale(10.0)).abs() < 1e-3);
    }

    #[test]
    fn overlay_type_parses_from_cli_strings() {
        assert_eq!("full".parse::<OverlayType>().unwrap(), OverlayType::Full);
        assert_eq!(
            "formation".parse::<OverlayType>().unwrap(),
            OverlayType::Formation
        );
        assert!("defense".parse::<OverlayType>().is_err());
    }
}
