pub mod plain_data_importer;
pub use plain_data_importer::*;

pub mod texture_importer;
pub use texture_importer::*;

pub mod shader_importer;
pub use shader_importer::*;

pub mod sprite_generator;
pub use sprite_generator::*;

pub mod font_importer;
pub use font_importer::*;
