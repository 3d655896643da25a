use clap::Parser;
use engine::geometry::FrameMetrics;
use engine::summary::{AnalysisSummary, PlayerTracking};
use engine::{generate, timecode, PitchSpace};
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use viz::{render_report, OverlayOptions, OverlayType, PlaybackDriver};

/// Tactical pitch viewer: renders a deterministic synthetic frame of a
/// video analysis as an HTML report, or replays it in the terminal.
#[derive(Parser)]
#[command(name = "tactical_pitch")]
struct Args {
    /// Analysis summary JSON produced by the analysis backend.
    /// Falls back to a built-in demo analysis.
    #[arg(long)]
    analysis: Option<PathBuf>,

    /// Frame to render in report mode.
    #[arg(long, default_value_t = 0)]
    frame: u32,

    /// Overlay layers: full, pressure, formation or players.
    #[arg(long, default_value = "full")]
    overlay: OverlayType,

    /// Add blurred per-player heat blobs.
    #[arg(long)]
    heat_map: bool,

    /// Hide jersey numbers on player markers.
    #[arg(long)]
    no_labels: bool,

    /// Output path for the HTML report.
    #[arg(long, default_value = "tactical_report.html")]
    output: PathBuf,

    /// Run a live playback demo for this many seconds instead of
    /// writing a report.
    #[arg(long)]
    play: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let summary = match &args.analysis {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => demo_summary(),
    };

    info!(
        "analysis {} loaded: {} frames, {}v{} players tracked",
        summary.short_id(),
        summary.total_frames,
        summary.player_tracking.home_team_players,
        summary.player_tracking.away_team_players
    );

    let options = OverlayOptions {
        overlay: args.overlay,
        show_heat_map: args.heat_map,
        show_labels: !args.no_labels,
    };

    if let Some(seconds) = args.play {
        run_playback(&summary, seconds).await;
        return Ok(());
    }

    let html = render_report(&summary, args.frame, &options, &PitchSpace::default())?;
    fs::write(&args.output, html)?;

    info!("report written to {}", args.output.display());

    Ok(())
}

async fn run_playback(summary: &AnalysisSummary, seconds: u64) {
    let mut driver = PlaybackDriver::new(summary.total_frames);
    driver.play().await;

    info!("playback started for {seconds}s");

    for _ in 0..seconds {
        tokio::time::sleep(Duration::from_secs(1)).await;

        let frame = driver.current_frame().await;
        let snapshot = generate(summary, frame);
        let metrics = FrameMetrics::from_snapshot(&snapshot);

        info!(
            "frame {frame} ({}) — {} pressing, min dist {}",
            timecode(frame),
            metrics.pressing_players,
            metrics
                .min_ball_distance
                .map(|d| format!("{d:.1}m"))
                .unwrap_or_else(|| "n/a".to_string()),
        );
    }

    driver.pause().await;
}

fn demo_summary() -> AnalysisSummary {
    AnalysisSummary {
        analysis_id: "demo0a1b2c3d".to_string(),
        session_id: Some(1),
        total_frames: 4350,
        player_tracking: PlayerTracking {
            home_team_players: 11,
            away_team_players: 11,
        },
        ball_visibility_percentage: 87.5,
    }
}
