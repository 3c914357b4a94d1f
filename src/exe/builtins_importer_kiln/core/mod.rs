mod importer;
pub use importer::*;

mod importer_registry;
pub use importer_registry::*;

mod timestamp;
pub use timestamp::*;

mod modifications;
pub use modifications::*;

mod import_flags;
pub use import_flags::*;

mod entry_store;
pub use entry_store::*;

mod shader_verify;
pub use shader_verify::*;

mod font_import;
pub use font_import::*;

mod dispatcher;
pub use dispatcher::*;

mod config;
pub use config::*;

mod pipeline;
pub use pipeline::*;

#[cfg(test)]
pub(crate) mod test_utils;
