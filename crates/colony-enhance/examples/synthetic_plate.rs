//! Example: enhance a rendered plate with uneven lighting.
//!
//! Draws a dish with a handful of colonies under a left-to-right illumination
//! ramp, runs the full pipeline, and writes both the input and the grayscale
//! result as PNG files.
//!
//! Run from the workspace root:
//!   cargo run -p colony-enhance --example synthetic_plate -- --help
//!   cargo run -p colony-enhance --example synthetic_plate

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use colony_enhance::{EnhanceConfig, Image, process};
use image::{GrayImage, RgbImage};

#[derive(Parser, Debug)]
#[command(about = "Render a synthetic colony plate and enhance it")]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: usize,

    #[arg(long, default_value_t = 480)]
    height: usize,

    /// Directory receiving plate.png and enhanced.png
    #[arg(long, default_value = "target/synthetic_plate")]
    out: PathBuf,
}

const COLONIES: [(f32, f32, f32); 6] = [
    (0.25, 0.30, 0.05),
    (0.55, 0.25, 0.04),
    (0.70, 0.60, 0.06),
    (0.35, 0.70, 0.03),
    (0.50, 0.50, 0.05),
    (0.80, 0.35, 0.03),
];

fn render_plate(width: usize, height: usize) -> Image<[u8; 3]> {
    let scale = width.min(height) as f32;
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let light = 0.6 + 0.4 * x as f32 / width as f32;
            let on_colony = COLONIES.iter().any(|&(cx, cy, r)| {
                let dx = x as f32 - cx * width as f32;
                let dy = y as f32 - cy * height as f32;
                (dx * dx + dy * dy).sqrt() < r * scale
            });
            let base = if on_colony {
                [235.0, 215.0, 170.0]
            } else {
                [150.0, 90.0, 70.0]
            };
            data.push(base.map(|v: f32| (v * light).round() as u8));
        }
    }
    Image::from_vec(width, height, data).expect("valid image")
}

fn main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let plate = render_plate(args.width, args.height);
    let rgb: Vec<u8> = plate.data().iter().flatten().copied().collect();
    RgbImage::from_raw(args.width as u32, args.height as u32, rgb)
        .context("constructing RgbImage")?
        .save(args.out.join("plate.png"))
        .context("writing plate.png")?;

    let t0 = Instant::now();
    let gray = process(&plate, &EnhanceConfig::default())?;
    let elapsed = t0.elapsed();

    GrayImage::from_raw(args.width as u32, args.height as u32, gray.into_vec())
        .context("constructing GrayImage")?
        .save(args.out.join("enhanced.png"))
        .context("writing enhanced.png")?;

    println!(
        "{}x{} enhanced in {:.2} ms -> {}",
        args.width,
        args.height,
        elapsed.as_secs_f64() * 1e3,
        args.out.display()
    );
    Ok(())
}
