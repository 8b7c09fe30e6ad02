use crate::error::RenderError;
use crate::models::BillOfMaterials;
use crate::rendering::png_codec::{encode_rgba, optimize_png};
use mosaic_core::{MosaicBuilder, MosaicGrid, Palette, PaletteKind, PixelBuffer, Variant};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// One rendered variant, ready to be written to disk
#[derive(Debug, Clone)]
pub struct VariantOutput {
    pub variant: Variant,
    pub png: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl VariantOutput {
    /// Output file name, e.g. `CIEDE_FLOYD.png`
    pub fn file_name(&self) -> String {
        format!("{}.png", self.variant.name())
    }
}

/// Runs mosaic variants over one source image.
///
/// The source and palettes are shared read-only between tasks; each
/// variant runs on the blocking pool since quantization and rendering are
/// CPU-bound.
#[derive(Debug, Clone)]
pub struct MosaicService {
    image: Arc<PixelBuffer>,
    full_palette: Arc<Palette>,
    grayscale_palette: Arc<Palette>,
    grid: MosaicGrid,
    block_size: usize,
    border_width: Option<usize>,
    optimize_png: bool,
}

impl MosaicService {
    pub fn new(image: PixelBuffer) -> Self {
        Self {
            image: Arc::new(image),
            full_palette: Arc::new(PaletteKind::Full.palette()),
            grayscale_palette: Arc::new(PaletteKind::Grayscale.palette()),
            grid: MosaicGrid::REFERENCE,
            block_size: mosaic_core::DEFAULT_BLOCK_SIZE,
            border_width: None,
            optimize_png: true,
        }
    }

    pub fn grid(mut self, grid: MosaicGrid) -> Self {
        self.grid = grid;
        self
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// `None` keeps the one-tile default border
    pub fn border_width(mut self, border_width: Option<usize>) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn optimize_png(mut self, enabled: bool) -> Self {
        self.optimize_png = enabled;
        self
    }

    /// Replace the palette used for one palette kind
    pub fn palette(mut self, kind: PaletteKind, palette: Palette) -> Self {
        match kind {
            PaletteKind::Full => self.full_palette = Arc::new(palette),
            PaletteKind::Grayscale => self.grayscale_palette = Arc::new(palette),
        }
        self
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    fn palette_for(&self, kind: PaletteKind) -> &Palette {
        match kind {
            PaletteKind::Full => &self.full_palette,
            PaletteKind::Grayscale => &self.grayscale_palette,
        }
    }

    /// Pipeline configuration for a variant
    pub fn builder_for(&self, variant: Variant) -> MosaicBuilder {
        let builder = MosaicBuilder::new(self.palette_for(variant.palette).clone())
            .grid(self.grid)
            .metric(variant.metric)
            .dither(variant.dither)
            .block_size(self.block_size);
        match self.border_width {
            Some(border) => builder.border_width(border),
            None => builder,
        }
    }

    /// Render every requested variant concurrently.
    ///
    /// Results come back in request order. The first failing variant fails
    /// the whole batch.
    pub async fn render_variants(
        &self,
        variants: &[Variant],
    ) -> Result<Vec<VariantOutput>, RenderError> {
        let mut tasks = JoinSet::new();
        for (slot, &variant) in variants.iter().enumerate() {
            let builder = self.builder_for(variant);
            let image = Arc::clone(&self.image);
            let optimize = self.optimize_png;
            tasks.spawn_blocking(move || {
                render_variant(variant, &builder, &image, optimize).map(|out| (slot, out))
            });
        }

        let mut outputs: Vec<Option<VariantOutput>> = vec![None; variants.len()];
        while let Some(joined) = tasks.join_next().await {
            let (slot, output) = joined.map_err(|e| RenderError::Task(e.to_string()))??;
            outputs[slot] = Some(output);
        }
        Ok(outputs.into_iter().flatten().collect())
    }

    /// Quantize one variant and list the tiles it needs
    pub async fn quantize_variant(&self, variant: Variant) -> Result<BillOfMaterials, RenderError> {
        let builder = self.builder_for(variant);
        let image = Arc::clone(&self.image);
        let grid = self.grid;

        tokio::task::spawn_blocking(move || -> Result<BillOfMaterials, RenderError> {
            let indices = builder.quantize_indices(&image)?;
            Ok(BillOfMaterials::from_indices(
                variant,
                grid,
                builder.palette(),
                &indices,
            ))
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

fn render_variant(
    variant: Variant,
    builder: &MosaicBuilder,
    image: &PixelBuffer,
    optimize: bool,
) -> Result<VariantOutput, RenderError> {
    let start = Instant::now();
    let mosaic = builder.render(image)?;
    let (width, height) = (mosaic.width(), mosaic.height());

    let mut png = encode_rgba(mosaic.as_rgba(), width, height)?;
    if optimize {
        png = optimize_png(png);
    }

    tracing::debug!(
        %variant,
        width,
        height,
        bytes = png.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered variant"
    );
    Ok(VariantOutput {
        variant,
        png,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::Rgb;

    fn service() -> MosaicService {
        let image = PixelBuffer::filled(Rgb::new(90, 140, 200), 40, 60).unwrap();
        MosaicService::new(image)
            .grid(MosaicGrid::new(4, 6).unwrap())
            .block_size(4)
            .optimize_png(false)
    }

    #[test]
    fn test_builder_for_variant() {
        let variant: Variant = "CIEDE_FLOYD_GRAYSCALES".parse().unwrap();
        let builder = service().builder_for(variant);

        assert_eq!(builder.palette().len(), 8);
        assert!(builder.is_dithering());
        assert_eq!(builder.grid_size(), MosaicGrid::new(4, 6).unwrap());
        assert_eq!(builder.effective_border_width(), 4);
    }

    #[test]
    fn test_explicit_border() {
        let builder = service()
            .border_width(Some(0))
            .builder_for(Variant::ALL[0]);
        assert_eq!(builder.effective_border_width(), 0);
    }

    #[test]
    fn test_palette_override() {
        let two_tone = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let builder = service()
            .palette(PaletteKind::Full, two_tone)
            .builder_for(Variant::ALL[0]);
        assert_eq!(builder.palette().len(), 2);
    }

    #[tokio::test]
    async fn test_render_single_variant() {
        let outputs = service().render_variants(&[Variant::ALL[1]]).await.unwrap();

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].file_name(), "CIEDE.png");
        assert_eq!((outputs[0].width, outputs[0].height), (4 * 4 + 8, 6 * 4 + 8));
        assert!(outputs[0].png.starts_with(&crate::rendering::png_codec::PNG_SIGNATURE));
    }

    #[tokio::test]
    async fn test_render_no_variants() {
        assert!(service().render_variants(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_render_zero_block_size_fails() {
        let err = service()
            .block_size(0)
            .render_variants(&Variant::ALL)
            .await
            .unwrap_err();
        assert!(matches!(err, RenderError::Mosaic(_)));
    }

    #[tokio::test]
    async fn test_render_huge_block_size_fails() {
        let err = service()
            .block_size(100_000)
            .render_variants(&[Variant::ALL[0]])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::Mosaic(mosaic_core::MosaicError::InvalidDimensions { what: "raster", .. })
        ));
    }

    #[tokio::test]
    async fn test_quantize_variant_counts_every_cell() {
        let bill = service().quantize_variant(Variant::ALL[2]).await.unwrap();
        assert_eq!(bill.variant, "EUKLID_FLOYD");
        assert_eq!(bill.cells.len(), 24);
        assert_eq!(bill.total_tiles(), 24);
    }
}
