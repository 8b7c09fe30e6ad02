pub mod bill_of_materials;
pub mod config;

pub use bill_of_materials::BillOfMaterials;
pub use config::{AppConfig, PaletteOverrides, TileColor};
