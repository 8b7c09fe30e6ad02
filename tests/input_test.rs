//! Source loading and configuration from disk.

mod common;

use common::fixtures;
use mosaic_core::{MosaicGrid, PaletteKind, Rgb};
use mosaic_generator::error::{ConfigError, RenderError};
use mosaic_generator::models::AppConfig;
use mosaic_generator::rendering::load_image;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_load_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "photo.png", fixtures::gradient_png(20, 30));

    let image = load_image(&path).await.unwrap();
    assert_eq!((image.width(), image.height()), (20, 30));
    assert_eq!(image.get(0, 0), Rgb::new(0, 96, 0));
    assert_eq!(image.get(19, 29), Rgb::new(255, 96, 255));
}

#[tokio::test]
async fn test_load_data_url_file() {
    let dir = tempfile::tempdir().unwrap();
    let png = fixtures::solid_png([12, 34, 56], 3, 2);
    let path = fixtures::write_file(dir.path(), "upload.txt", fixtures::data_url(&png));

    let image = load_image(&path).await.unwrap();
    assert!(image.pixels().iter().all(|&p| p == Rgb::new(12, 34, 56)));
}

#[tokio::test]
async fn test_load_rgba_strips_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let png = fixtures::encode_png(&[0, 0, 0, 0, 10, 20, 30, 255], 2, 1, png::ColorType::Rgba);
    let path = fixtures::write_file(dir.path(), "alpha.png", png);

    let image = load_image(&path).await.unwrap();
    assert_eq!(image.pixels(), &[Rgb::WHITE, Rgb::new(10, 20, 30)]);
}

#[tokio::test]
async fn test_load_non_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "notes.txt", "hello, mosaic");

    let err = load_image(&path).await.unwrap_err();
    assert!(matches!(err, RenderError::Input(_)), "{err}");
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "mosaic.yaml", fixtures::SMALL_CONFIG);

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.grid().unwrap(), MosaicGrid::new(8, 12).unwrap());
    assert_eq!(config.block_size, 4);
    assert!(!config.optimize_png);

    let names: Vec<String> = config.variants().unwrap().iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["EUKLID", "CIEDE_FLOYD_GRAYSCALES"]);
    assert_eq!(config.palette(PaletteKind::Full).unwrap().len(), 29);
}

#[test]
fn test_config_file_with_bad_variant() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "mosaic.yaml", "variants: [EUKLID, MOSAIC]\n");

    let config = AppConfig::load(Some(&path)).unwrap();
    assert!(matches!(
        config.variants(),
        Err(ConfigError::UnknownVariant(name)) if name == "MOSAIC"
    ));
}
