use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosaic_core::{MosaicGrid, PaletteKind, PixelBuffer, Variant};
use mosaic_generator::models::AppConfig;
use mosaic_generator::rendering::load_image;
use mosaic_generator::services::MosaicService;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Turn a photo into disc-tile mosaics over a fixed tile palette")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render mosaic PNGs, one file per variant
    Render {
        /// Source image: PNG, or a text file holding a base64 data URL
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Variant to render (repeatable); defaults to the configured list
        #[arg(long = "variant")]
        variants: Vec<Variant>,

        /// Grid size in cells, e.g. 64x96
        #[arg(long, value_parser = parse_grid)]
        grid: Option<MosaicGrid>,

        /// Tile edge length in pixels
        #[arg(long)]
        block_size: Option<usize>,

        /// Skip oxipng recompression
        #[arg(long)]
        no_optimize: bool,
    },
    /// Print the tile identifiers and counts for one variant as JSON
    Quantize {
        /// Source image: PNG, or a text file holding a base64 data URL
        #[arg(short, long)]
        input: PathBuf,

        /// Variant to quantize
        #[arg(long)]
        variant: Variant,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grid size in cells, e.g. 64x96
        #[arg(long, value_parser = parse_grid)]
        grid: Option<MosaicGrid>,
    },
    /// List the tile palettes
    Palettes {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Parse `WIDTHxHEIGHT`
fn parse_grid(s: &str) -> Result<MosaicGrid, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let height = h.trim().parse::<usize>().map_err(|e| e.to_string())?;
    MosaicGrid::new(width, height).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosaic=info,mosaic_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            variants,
            grid,
            block_size,
            no_optimize,
        } => {
            run_render_command(
                &input,
                &output,
                config.as_deref(),
                variants,
                grid,
                block_size,
                no_optimize,
            )
            .await
        }
        Commands::Quantize {
            input,
            variant,
            config,
            grid,
        } => run_quantize_command(&input, variant, config.as_deref(), grid).await,
        Commands::Palettes { config } => run_palettes_command(config.as_deref()),
    }
}

/// Apply config values, then command-line overrides
fn build_service(
    image: PixelBuffer,
    config: &AppConfig,
    grid: Option<MosaicGrid>,
    block_size: Option<usize>,
) -> anyhow::Result<MosaicService> {
    let grid = match grid {
        Some(grid) => grid,
        None => config.grid()?,
    };

    let mut service = MosaicService::new(image)
        .grid(grid)
        .block_size(block_size.unwrap_or(config.block_size))
        .border_width(config.border_width)
        .optimize_png(config.optimize_png);
    for kind in PaletteKind::ALL {
        service = service.palette(kind, config.palette(kind)?);
    }
    Ok(service)
}

async fn run_render_command(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    variants: Vec<Variant>,
    grid: Option<MosaicGrid>,
    block_size: Option<usize>,
    no_optimize: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;
    let variants = if variants.is_empty() {
        config.variants()?
    } else {
        variants
    };

    let image = load_image(input).await?;
    let mut service = build_service(image, &config, grid, block_size)?;
    if no_optimize {
        service = service.optimize_png(false);
    }

    tracing::info!(variants = variants.len(), "Rendering mosaics");
    let outputs = service.render_variants(&variants).await?;

    tokio::fs::create_dir_all(output).await?;
    for out in &outputs {
        let path = output.join(out.file_name());
        tokio::fs::write(&path, &out.png).await?;
        tracing::info!(
            path = %path.display(),
            width = out.width,
            height = out.height,
            bytes = out.png.len(),
            "Wrote mosaic"
        );
    }

    Ok(())
}

async fn run_quantize_command(
    input: &Path,
    variant: Variant,
    config_path: Option<&Path>,
    grid: Option<MosaicGrid>,
) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;
    let image = load_image(input).await?;
    let service = build_service(image, &config, grid, None)?;

    let bill = service.quantize_variant(variant).await?;
    println!("{}", serde_json::to_string_pretty(&bill)?);
    Ok(())
}

fn run_palettes_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;

    for kind in PaletteKind::ALL {
        let palette = config.palette(kind)?;
        println!("{} ({} colors):", kind, palette.len());
        for entry in palette.entries() {
            println!("  {:>4}  {}", entry.id, entry.color);
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        assert_eq!(parse_grid("64x96").unwrap(), MosaicGrid::REFERENCE);
        assert_eq!(parse_grid("8X12").unwrap(), MosaicGrid::new(8, 12).unwrap());
    }

    #[test]
    fn test_parse_grid_rejects_bad_input() {
        assert!(parse_grid("64").is_err());
        assert!(parse_grid("0x96").is_err());
        assert!(parse_grid("ax9").is_err());
    }

    #[test]
    fn test_cli_parses_repeated_variants() {
        let cli = Cli::try_parse_from([
            "mosaic",
            "render",
            "-i",
            "photo.png",
            "-o",
            "out",
            "--variant",
            "EUKLID",
            "--variant",
            "ciede-floyd",
            "--grid",
            "16x24",
        ])
        .unwrap();

        match cli.command {
            Commands::Render { variants, grid, .. } => {
                let names: Vec<String> = variants.iter().map(|v| v.name()).collect();
                assert_eq!(names, vec!["EUKLID", "CIEDE_FLOYD"]);
                assert_eq!(grid, Some(MosaicGrid::new(16, 24).unwrap()));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_variant() {
        let result = Cli::try_parse_from([
            "mosaic", "quantize", "-i", "photo.png", "--variant", "SEPIA",
        ]);
        assert!(result.is_err());
    }
}
