use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gpx_timeline::config::{parse_duration_minutes, Config};
use gpx_timeline::gpx_io;
use gpx_timeline::resample::{DEFAULT_FPS, DEFAULT_SUBDIVISIONS};
use gpx_timeline::{select, CropResponse, Interpolation, ResampleMode, Resampler, Track};

#[derive(Parser)]
#[command(name = "gpx-timeline")]
#[command(about = "Resample and crop GPS tracks for animation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a track
    Info { track: PathBuf },
    /// Resample a track into an animation timeline (JSON)
    Animate {
        track: PathBuf,
        #[arg(long)]
        config: Option<String>,
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        #[arg(long)]
        subdivisions: Option<usize>,
        #[arg(long)]
        fps: Option<f64>,
        /// Straight lines between points in frame-rate mode
        #[arg(long)]
        linear: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Cut a time window out of a track and save it as GPX
    Crop {
        track: PathBuf,
        #[arg(long)]
        config: Option<String>,
        #[arg(long, default_value_t = 0)]
        start_index: usize,
        /// Window length, e.g. "5m"; defaults to the rest of the track
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Subdivide,
    FrameRate,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { track } => info(&track),
        Commands::Animate {
            track,
            config,
            mode,
            subdivisions,
            fps,
            linear,
            out,
        } => {
            let config = match load_config(config.as_deref()) {
                Some(c) => c,
                None => return ExitCode::FAILURE,
            };
            let mode = resolve_mode(config.resample, mode, subdivisions, fps, linear);
            animate(&track, mode, out.as_deref())
        }
        Commands::Crop {
            track,
            config,
            start_index,
            duration,
            out,
        } => {
            let config = match load_config(config.as_deref()) {
                Some(c) => c,
                None => return ExitCode::FAILURE,
            };
            let duration_minutes = match duration {
                Some(d) => parse_duration_minutes(&d).map(Some),
                None => config.crop.duration_minutes(),
            };
            match duration_minutes {
                Ok(minutes) => crop(&track, start_index, minutes, &out),
                Err(e) => {
                    eprintln!("Config error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match path {
        None => Some(Config::default()),
        Some(path) => match Config::from_file(path) {
            Ok(c) => Some(c),
            Err(e) => {
                eprintln!("Error reading config {}: {}", path, e);
                None
            }
        },
    }
}

/// Command-line flags win over the config file.
fn resolve_mode(
    configured: ResampleMode,
    mode: Option<Mode>,
    subdivisions: Option<usize>,
    fps: Option<f64>,
    linear: bool,
) -> ResampleMode {
    let base = match (mode, configured) {
        (None, m) => m,
        (Some(Mode::Subdivide), m @ ResampleMode::Subdivide { .. }) => m,
        (Some(Mode::FrameRate), m @ ResampleMode::FrameRate { .. }) => m,
        (Some(Mode::Subdivide), _) => ResampleMode::Subdivide {
            subdivisions: DEFAULT_SUBDIVISIONS,
        },
        (Some(Mode::FrameRate), _) => ResampleMode::FrameRate {
            fps: DEFAULT_FPS,
            interpolation: Interpolation::Smooth,
        },
    };

    match base {
        ResampleMode::Subdivide { subdivisions: k } => ResampleMode::Subdivide {
            subdivisions: subdivisions.unwrap_or(k),
        },
        ResampleMode::FrameRate {
            fps: f,
            interpolation,
        } => ResampleMode::FrameRate {
            fps: fps.unwrap_or(f),
            interpolation: if linear {
                Interpolation::Linear
            } else {
                interpolation
            },
        },
    }
}

fn load_track(path: &Path) -> Option<Track> {
    match gpx_io::read_file(path) {
        Ok(t) => Some(t),
        Err(e) => {
            eprintln!("Error reading track {}: {}", path.display(), e);
            None
        }
    }
}

fn info(path: &Path) -> ExitCode {
    let track = match load_track(path) {
        Some(t) => t,
        None => return ExitCode::FAILURE,
    };

    let bbox = track.bounding_box();
    let (center_lat, center_lon) = track.centroid();
    println!("Points:   {}", track.len());
    println!("Start:    {}", track.start_time());
    println!("End:      {}", track.end_time());
    println!("Duration: {:.1} s", track.duration_seconds());
    println!(
        "Bounds:   lat {:.6}..{:.6}, lon {:.6}..{:.6}",
        bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon
    );
    println!("Center:   {:.6}, {:.6}", center_lat, center_lon);
    ExitCode::SUCCESS
}

fn animate(path: &Path, mode: ResampleMode, out: Option<&Path>) -> ExitCode {
    let track = match load_track(path) {
        Some(t) => t,
        None => return ExitCode::FAILURE,
    };

    let timeline = match Resampler::new(mode).resample(&track) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Resampling error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let json = match serde_json::to_string_pretty(&timeline) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match out {
        Some(out) => {
            if let Err(e) = fs::write(out, json) {
                eprintln!("Error writing {}: {}", out.display(), e);
                return ExitCode::FAILURE;
            }
            println!(
                "{} frames, {:.3} ms per frame -> {}",
                timeline.len(),
                timeline.frame_duration_ms(),
                out.display()
            );
        }
        None => println!("{}", json),
    }
    ExitCode::SUCCESS
}

fn crop(path: &Path, start_index: usize, duration_minutes: Option<f64>, out: &Path) -> ExitCode {
    let track = match load_track(path) {
        Some(t) => t,
        None => return ExitCode::FAILURE,
    };

    let selection = match select(&track, start_index, duration_minutes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Crop error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match selection.window() {
        Some(window) => {
            if let Err(e) = gpx_io::export_to_path(&window.track, out) {
                eprintln!("Export error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        None => log::warn!("Nothing selected, {} not written", out.display()),
    }

    match serde_json::to_string_pretty(&CropResponse::from(&selection)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
