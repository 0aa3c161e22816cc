use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ce_core::{ChannelOrder, Image};
use ce_enhance::{EnhanceConfig, process_interleaved};
use clap::Parser;
use image::{DynamicImage, GrayImage};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "colony_enhance")]
#[command(about = "Flatten illumination and sharpen colony rims on a plate photograph")]
struct Cli {
    /// Colour image to enhance.
    #[arg(long, required_unless_present = "print_config")]
    input: Option<PathBuf>,
    /// Where to write the 8-bit grayscale result.
    #[arg(long, required_unless_present = "print_config")]
    output: Option<PathBuf>,
    /// JSON file with `EnhanceConfig` fields; missing fields keep defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    blur_size: Option<usize>,
    #[arg(long)]
    target_width: Option<usize>,
    /// Process channels one after another instead of on the thread pool.
    #[arg(long, default_value_t = false)]
    sequential: bool,
    /// Convert gray or RGBA input to RGB instead of rejecting it.
    #[arg(long, default_value_t = false)]
    convert_rgb: bool,
    /// Print the effective configuration as JSON and exit.
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = build_config(&cli)?;

    if cli.print_config {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg).context("serializing config")?
        );
        return Ok(());
    }

    let (Some(input), Some(output)) = (&cli.input, &cli.output) else {
        bail!("--input and --output are required");
    };

    ensure_file_exists(input, "input")?;
    let decoded = image::open(input)
        .with_context(|| format!("opening input image {}", input.display()))?;
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    info!(
        width,
        height,
        color = ?decoded.color(),
        input = %input.display(),
        "decoded input"
    );

    let (channels, bytes) = interleaved_bytes(decoded, cli.convert_rgb);
    let gray = process_interleaved(width, height, channels, &bytes, &cfg)
        .with_context(|| format!("enhancing {}", input.display()))?;

    save_u8_image(output, &gray)?;
    info!(output = %output.display(), "wrote enhanced image");
    Ok(())
}

fn build_config(cli: &Cli) -> Result<EnhanceConfig> {
    let mut cfg = match &cli.config {
        Some(path) => read_config(path)?,
        None => EnhanceConfig::default(),
    };
    if let Some(size) = cli.blur_size {
        cfg = cfg.with_laplacian_blur_size(size);
    }
    if let Some(width) = cli.target_width {
        cfg = cfg.with_target_width(width);
    }
    if cli.sequential {
        cfg = cfg.with_parallel(false);
    }
    // Decoded pixels are always RGB.
    if cfg.channel_order != ChannelOrder::Rgb {
        warn!(
            configured = ?cfg.channel_order,
            "decoded images are RGB; ignoring configured channel order"
        );
        cfg = cfg.with_channel_order(ChannelOrder::Rgb);
    }
    cfg.validate().context("validating configuration")?;
    Ok(cfg)
}

fn read_config(path: &Path) -> Result<EnhanceConfig> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

/// Packed 8-bit samples and their per-pixel channel count.
///
/// Three-channel images are always passed as RGB. Other layouts are passed
/// through unchanged (and rejected downstream) unless `convert_rgb` is set.
fn interleaved_bytes(img: DynamicImage, convert_rgb: bool) -> (usize, Vec<u8>) {
    let channels = img.color().channel_count() as usize;
    if channels == 3 || convert_rgb {
        return (3, img.to_rgb8().into_raw());
    }
    (channels, img.into_bytes())
}

fn save_u8_image(path: &Path, img: &Image<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
