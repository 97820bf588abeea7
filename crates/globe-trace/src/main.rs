use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use globe_core::{DragTracker, FrameInput, FrameOutput, SceneConfig, SceneDirector};
use std::io::Write;
use std::path::PathBuf;

/// Sweep scroll progress from 0 to 1 through the scene and print one CSV row per step.
#[derive(Parser, Debug)]
#[command(name = "globe-trace", version)]
struct Args {
    /// Scene config JSON; the built-in scene when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of progress steps between 0 and 1.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    steps: u64,

    /// Frames rendered at each step before the row is printed.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    frames_per_step: u64,

    /// Simulated drag in CSS pixels, applied before the sweep (e.g. "120,-40").
    /// Enables manual rotation.
    #[arg(long, value_parser = parse_drag, allow_hyphen_values = true)]
    drag: Option<Vec2>,

    /// Place the camera on its target at every step instead of easing.
    #[arg(long)]
    settle: bool,
}

fn parse_drag(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected dx,dy, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("dx: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("dy: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(p) => {
            let json = std::fs::read_to_string(p)
                .with_context(|| format!("reading {}", p.display()))?;
            let cfg = SceneConfig::from_json(&json)
                .with_context(|| format!("parsing {}", p.display()))?;
            log::info!("[config] loaded {}", p.display());
            Ok(cfg)
        }
        None => Ok(SceneConfig::default()),
    }
}

const HEADER: &str = "progress,stage,cam_x,cam_y,cam_z,distance,zoom,marker_visible,marker_t,markers_visible,timeline_opacity,revealed_entries,hero_opacity";

fn row(out: &FrameOutput) -> String {
    let markers_visible = out
        .markers
        .iter()
        .filter(|m| m.visible)
        .map(|m| m.label.as_str())
        .collect::<Vec<_>>()
        .join("|");
    let revealed = out
        .timeline
        .entries
        .iter()
        .filter(|e| e.reveal >= 1.0)
        .count();
    format!(
        "{:.4},{},{:.4},{:.4},{:.4},{:.4},{:.3},{},{:.4},{},{:.3},{},{:.3}",
        out.progress,
        out.stage.name(),
        out.camera.position.x,
        out.camera.position.y,
        out.camera.position.z,
        out.camera.distance(),
        out.camera.zoom,
        out.flight_marker.visible,
        out.flight_marker.t,
        markers_visible,
        out.timeline.opacity,
        revealed,
        out.cues.hero_opacity,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = load_config(args.config.as_ref())?;
    let mut drag = DragTracker::new(cfg.drag_sensitivity);
    if let Some(delta) = args.drag {
        cfg.manual_rotation = true;
        drag.begin(0, Vec2::ZERO);
        let _ = drag.drag_to(delta);
        let _ = drag.end(0);
        let r = drag.rotation();
        log::info!("[drag] simulated pitch={:.3} yaw={:.3}", r.pitch, r.yaw);
    }

    let mut director = SceneDirector::new(cfg)?;
    let geometry = director.static_geometry();
    log::info!(
        "[trace] arc_points={} stars={} markers={}",
        geometry.flight_arc.len(),
        geometry.stars.len(),
        geometry.markers.len()
    );

    let steps = args.steps;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HEADER}")?;
    for i in 0..=steps {
        let input = FrameInput {
            progress: i as f32 / steps as f32,
            rotation: drag.rotation(),
            elapsed: None,
        };
        let mut frame = if args.settle {
            director.settle(input)
        } else {
            director.frame(input)
        };
        for _ in 1..args.frames_per_step {
            frame = director.frame(input);
        }
        writeln!(out, "{}", row(&frame))?;
    }
    Ok(())
}
