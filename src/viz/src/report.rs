use crate::overlay::{render, OverlayOptions};
use askama::Template;
use chrono::Local;
use engine::geometry::FrameMetrics;
use engine::{generate, timecode, AnalysisSummary, PitchSpace};
use log::debug;

#[derive(Template)]
#[template(path = "report.html")]
struct TacticalReportTemplate {
    analysis_short_id: String,
    frame: u32,
    frame_timecode: String,
    generated_at: String,
    svg: String,
    pressing_players: usize,
    avg_ball_distance: String,
    min_ball_distance: String,
    home_players: usize,
    away_players: usize,
    ball_visibility: String,
}

/// Standalone HTML tactical report for one frame: the rendered pitch
/// plus the live metrics the viewer shows alongside it.
pub fn render_report(
    summary: &AnalysisSummary,
    frame: u32,
    options: &OverlayOptions,
    pitch: &PitchSpace,
) -> Result<String, askama::Error> {
    let snapshot = generate(summary, frame);
    let metrics = FrameMetrics::from_snapshot(&snapshot);
    let scene = render(&snapshot, options, pitch);

    debug!(
        "report for analysis {} frame {}: {} layers, {} pressing",
        summary.short_id(),
        frame,
        scene.layers.len(),
        metrics.pressing_players
    );

    TacticalReportTemplate {
        analysis_short_id: summary.short_id().to_string(),
        frame,
        frame_timecode: timecode(frame),
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        svg: scene.to_svg(),
        pressing_players: metrics.pressing_players,
        avg_ball_distance: meters(metrics.avg_ball_distance),
        min_ball_distance: meters(metrics.min_ball_distance),
        home_players: metrics.home_players,
        away_players: metrics.away_players,
        ball_visibility: format!("{:.1}", summary.ball_visibility_percentage),
    }
    .render()
}

fn meters(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.1}m"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::summary::PlayerTracking;

    fn summary(home: u32, away: u32) -> AnalysisSummary {
        AnalysisSummary {
            analysis_id: "c4d2e9f1-report".to_string(),
            session_id: Some(7),
            total_frames: 9000,
            player_tracking: PlayerTracking {
                home_team_players: home,
                away_team_players: away,
            },
            ball_visibility_percentage: 91.25,
        }
    }

    #[test]
    fn report_embeds_identity_frame_and_pitch() {
        let html = render_report(
            &summary(11, 11),
            5400,
            &OverlayOptions::default(),
            &PitchSpace::default(),
        )
        .unwrap();

        assert!(html.contains("Tactical Analysis Report"));
        assert!(html.contains("c4d2e9f1"));
        assert!(html.contains("Frame: 5400 (03:00)"));
        assert!(html.contains("<svg"));
        assert!(html.contains("91.2%"));
    }

    #[test]
    fn report_shows_na_metrics_when_nothing_is_tracked() {
        let html = render_report(
            &summary(0, 0),
            0,
            &OverlayOptions::default(),
            &PitchSpace::default(),
        )
        .unwrap();

        assert!(html.contains("N/A"));
    }
}
