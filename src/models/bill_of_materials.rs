use mosaic_core::{MosaicGrid, Palette, Variant};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tile identifiers of a quantized mosaic, plus how many of each are needed
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BillOfMaterials {
    pub variant: String,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Row-major tile identifiers
    pub cells: Vec<String>,
    /// Identifier to tile count
    pub counts: BTreeMap<String, usize>,
}

impl BillOfMaterials {
    /// Build from row-major palette indices
    pub fn from_indices(
        variant: Variant,
        grid: MosaicGrid,
        palette: &Palette,
        indices: &[usize],
    ) -> Self {
        let cells: Vec<String> = indices.iter().map(|&i| palette.id(i).to_string()).collect();
        let mut counts = BTreeMap::new();
        for id in &cells {
            *counts.entry(id.clone()).or_insert(0) += 1;
        }

        Self {
            variant: variant.name(),
            grid_width: grid.width(),
            grid_height: grid.height(),
            cells,
            counts,
        }
    }

    pub fn total_tiles(&self) -> usize {
        self.counts.values().sum()
    }
}
