//! Renders a noise function into an RGBA frame and previews it in the terminal.
//!
//! Run from repo root:
//!   `cargo run -p noise-preview`                                  - value noise, defaults
//!   `cargo run -p noise-preview -- --noise simplex --columns 96`  - wider thumbnail
//!   `cargo run -p noise-preview -- --noise value --v1 3.1,17.4`   - retuned hash
//!
//! Set `RUST_LOG=debug` for render timings.

mod frame;

use std::time::Instant;

use clap::Parser;
use glam::DVec2;
use rhizome_resin_noise::{
    GradientNoise2D, Interpolation, Noise2D, NoiseKind, RandomGradient2D, RandomNoise2D,
    Simplex2D, ValueNoise2D,
};
use rhizome_resin_vecmath::{AnyVec, Channel, VecMathError};
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use frame::{Frame, level};

/// Darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

#[derive(Debug, Error)]
enum PreviewError {
    #[error("invalid vector '{0}': expected comma-separated numbers")]
    InvalidVector(String),

    #[error("invalid vector shape: {0}")]
    Shape(#[from] VecMathError),

    #[error("frame must be at least 1x1, got {width}x{height}")]
    EmptyFrame { width: usize, height: usize },
}

#[derive(Parser, Debug)]
#[command(name = "noise-preview")]
#[command(about = "Render a noise function into a frame and preview it as ASCII")]
struct Cli {
    /// Noise to render: random, value, gradient or simplex
    #[arg(long, default_value = "value")]
    noise: NoiseKind,

    /// Kernel for value and gradient noise: cubic or quintic
    #[arg(long, default_value = "cubic")]
    kernel: Interpolation,

    #[arg(long, default_value_t = 256)]
    width: usize,

    #[arg(long, default_value_t = 256)]
    height: usize,

    /// Lattice cells spanned by the frame
    #[arg(long, default_value_t = 10.0)]
    scale: f64,

    /// Hash direction, as "x,y"
    #[arg(long, value_parser = parse_vec2)]
    v1: Option<DVec2>,

    /// Second hash direction for gradient noise, as "x,y"
    #[arg(long, value_parser = parse_vec2)]
    v2: Option<DVec2>,

    /// Hash scale
    #[arg(long)]
    a: Option<f64>,

    /// Thumbnail width in characters
    #[arg(long, default_value_t = 64)]
    columns: usize,
}

fn parse_vec2(s: &str) -> Result<DVec2, PreviewError> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| PreviewError::InvalidVector(s.to_string()))?;

    match AnyVec::from_components(&components)? {
        AnyVec::Vec2(v) => Ok(v),
        other => Err(VecMathError::ArityMismatch {
            expected: 2,
            got: other.arity(),
        }
        .into()),
    }
}

fn scalar_hash(cli: &Cli) -> RandomNoise2D {
    let mut hash = RandomNoise2D::new();
    if let Some(v1) = cli.v1 {
        hash = hash.direction(v1);
    }
    if let Some(a) = cli.a {
        hash = hash.scale(a);
    }
    hash
}

fn gradient_hash(cli: &Cli) -> RandomGradient2D {
    let mut hash = RandomGradient2D::new();
    hash = hash.directions(cli.v1.unwrap_or(hash.v1), cli.v2.unwrap_or(hash.v2));
    if let Some(a) = cli.a {
        hash = hash.scale(a);
    }
    hash
}

/// Builds the sampler selected on the command line.
fn sampler(cli: &Cli) -> Box<dyn Noise2D> {
    match cli.noise {
        NoiseKind::Random | NoiseKind::Value if cli.v2.is_some() => {
            warn!(noise = %cli.noise, "--v2 only applies to gradient noise, ignoring");
        }
        NoiseKind::Simplex if cli.v1.is_some() || cli.v2.is_some() || cli.a.is_some() => {
            warn!("simplex noise has no hash parameters, ignoring --v1/--v2/--a");
        }
        _ => {}
    }

    match cli.noise {
        NoiseKind::Random => Box::new(scalar_hash(cli)),
        NoiseKind::Value => Box::new(
            ValueNoise2D::new()
                .hash(scalar_hash(cli))
                .kernel(cli.kernel),
        ),
        NoiseKind::Gradient => Box::new(
            GradientNoise2D::new()
                .hash(gradient_hash(cli))
                .kernel(cli.kernel),
        ),
        NoiseKind::Simplex => Box::new(Simplex2D::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Stats {
    min: f64,
    max: f64,
    mean: f64,
}

/// Samples every pixel at `(row, column) / (width, height) * scale`.
fn render(noise: &dyn Noise2D, signed: bool, frame: &mut Frame, scale: f64) -> Stats {
    let res = DVec2::new(frame.width() as f64, frame.height() as f64);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;

    for row in 0..frame.height() {
        for column in 0..frame.width() {
            let xy = DVec2::new(row as f64, column as f64) / res * scale;
            let value = noise.sample(xy);
            min = min.min(value);
            max = max.max(value);
            sum += value;

            let unit = if signed { value * 0.5 + 0.5 } else { value };
            frame.put_gray(row, column, level(unit));
        }
    }

    Stats {
        min,
        max,
        mean: sum / (frame.width() * frame.height()) as f64,
    }
}

/// Downsamples the frame to `columns` characters per line.
fn thumbnail(frame: &Frame, columns: usize) -> String {
    let columns = columns.clamp(1, frame.width());
    // Terminal cells are roughly twice as tall as wide.
    let rows = (columns * frame.height() / (frame.width() * 2)).max(1);

    let mut out = String::with_capacity((columns + 1) * rows);
    for r in 0..rows {
        let row = r * frame.height() / rows;
        for c in 0..columns {
            let column = c * frame.width() / columns;
            let level = frame.channel(row, column, Channel::R) as usize;
            out.push(RAMP[level * (RAMP.len() - 1) / 255] as char);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), PreviewError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    if cli.width == 0 || cli.height == 0 {
        return Err(PreviewError::EmptyFrame {
            width: cli.width,
            height: cli.height,
        });
    }

    info!(
        noise = %cli.noise,
        kernel = %cli.kernel,
        width = cli.width,
        height = cli.height,
        scale = cli.scale,
        "rendering"
    );

    let noise = sampler(&cli);
    let mut frame = Frame::new(cli.width, cli.height);

    let start = Instant::now();
    let stats = render(noise.as_ref(), cli.noise.is_signed(), &mut frame, cli.scale);
    debug!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "frame rendered");
    info!(min = stats.min, max = stats.max, mean = stats.mean, "frame statistics");

    print!("{}", thumbnail(&frame, cli.columns));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("noise-preview").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_vec2() {
        assert_eq!(parse_vec2("3.1, 17.4").unwrap(), DVec2::new(3.1, 17.4));
        assert!(matches!(parse_vec2("1,x"), Err(PreviewError::InvalidVector(_))));
        assert!(matches!(
            parse_vec2("1,2,3"),
            Err(PreviewError::Shape(VecMathError::ArityMismatch {
                expected: 2,
                got: 3
            }))
        ));
        assert!(matches!(
            parse_vec2("1"),
            Err(PreviewError::Shape(VecMathError::UnsupportedArity(1)))
        ));
    }

    #[test]
    fn test_cli_defaults_match_worker() {
        let cli = cli(&[]);
        assert_eq!(cli.noise, NoiseKind::Value);
        assert_eq!(cli.kernel, Interpolation::Cubic);
        assert_eq!(cli.scale, 10.0);
    }

    #[test]
    fn test_hash_parameters_reach_sampler() {
        let tuned = cli(&["--noise", "value", "--v1", "3.1,17.4", "--a", "1234.5"]);
        let hash = scalar_hash(&tuned);
        assert_eq!(hash.v, DVec2::new(3.1, 17.4));
        assert_eq!(hash.a, 1234.5);

        let p = DVec2::new(1.3, 2.6);
        let expected = ValueNoise2D::new().hash(hash).sample(p);
        assert_eq!(sampler(&tuned).sample(p), expected);

        let gradient = gradient_hash(&cli(&["--noise", "gradient", "--v2", "1,2"]));
        assert_eq!(gradient.v1, RandomGradient2D::new().v1);
        assert_eq!(gradient.v2, DVec2::new(1.0, 2.0));
    }

    #[test]
    fn test_render_fills_frame() {
        for kind in NoiseKind::ALL {
            let cli = cli(&["--noise", &kind.to_string(), "--width", "32", "--height", "16"]);
            let mut frame = Frame::new(cli.width, cli.height);
            let stats = render(sampler(&cli).as_ref(), kind.is_signed(), &mut frame, cli.scale);

            assert!(stats.min <= stats.mean && stats.mean <= stats.max);
            if kind.is_signed() {
                assert!(stats.min >= -1.2 && stats.max <= 1.2, "{} out of range", kind);
            } else {
                assert!(stats.min >= 0.0 && stats.max <= 1.0, "{} out of range", kind);
            }
            assert_eq!(frame.channel(15, 31, Channel::A), 255);
        }
    }

    #[test]
    fn test_thumbnail_shape() {
        let mut frame = Frame::new(40, 20);
        frame.put_gray(0, 0, 255);
        let text = thumbnail(&frame, 20);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.len() == 20));
        assert!(lines[0].starts_with('@'));
        assert!(lines[4].ends_with(' '));
    }
}
