pub mod mosaic_service;

pub use mosaic_service::{MosaicService, VariantOutput};
