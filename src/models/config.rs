use crate::error::ConfigError;
use mosaic_core::{
    MosaicError, MosaicGrid, Palette, PaletteEntry, PaletteError, PaletteKind, Rgb, Variant,
    DEFAULT_BLOCK_SIZE,
};
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Mosaic width in cells
    pub grid_width: usize,

    /// Mosaic height in cells
    pub grid_height: usize,

    /// Edge length of one square tile in output pixels
    pub block_size: usize,

    /// Black frame around the tile grid; defaults to one tile
    pub border_width: Option<usize>,

    /// Variant names to render, e.g. `CIEDE_FLOYD`
    pub variants: Vec<String>,

    /// Run oxipng over every encoded PNG
    pub optimize_png: bool,

    /// Replacement tile palettes
    pub palettes: PaletteOverrides,
}

/// Optional replacements for the built-in palettes
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaletteOverrides {
    pub full: Option<Vec<TileColor>>,
    pub grayscale: Option<Vec<TileColor>>,
}

/// One tile color in a palette override
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TileColor {
    /// Identifier printed in the bill of materials
    pub id: String,

    /// Hex color, `#RRGGBB` or `#RGB`
    pub color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_width: MosaicGrid::REFERENCE.width(),
            grid_height: MosaicGrid::REFERENCE.height(),
            block_size: DEFAULT_BLOCK_SIZE,
            border_width: None,
            variants: Variant::ALL.iter().map(|v| v.name()).collect(),
            optimize_png: true,
            palettes: PaletteOverrides::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// No path, or a path that does not exist, yields the defaults. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            grid_width = config.grid_width,
            grid_height = config.grid_height,
            variants = config.variants.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Grid size, validated
    pub fn grid(&self) -> Result<MosaicGrid, MosaicError> {
        MosaicGrid::new(self.grid_width, self.grid_height)
    }

    /// Resolve the configured variant names
    pub fn variants(&self) -> Result<Vec<Variant>, ConfigError> {
        self.variants
            .iter()
            .map(|name| {
                name.parse::<Variant>()
                    .map_err(|_| ConfigError::UnknownVariant(name.clone()))
            })
            .collect()
    }

    /// Tile palette for a palette kind, honouring overrides
    pub fn palette(&self, kind: PaletteKind) -> Result<Palette, ConfigError> {
        let custom = match kind {
            PaletteKind::Full => self.palettes.full.as_ref(),
            PaletteKind::Grayscale => self.palettes.grayscale.as_ref(),
        };
        let Some(colors) = custom else {
            return Ok(kind.palette());
        };

        let wrap = |source: PaletteError| ConfigError::Palette {
            name: kind.name().to_string(),
            source,
        };
        let entries = colors
            .iter()
            .map(|tile| {
                tile.color
                    .parse::<Rgb>()
                    .map(|color| PaletteEntry::new(tile.id.clone(), color))
                    .map_err(|e| wrap(PaletteError::ParseColor(e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(entries).map_err(wrap)
    }
}
