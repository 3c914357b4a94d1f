mod resource_uuid;
pub use resource_uuid::*;

mod asset_entry;
pub use asset_entry::*;

mod dependency_map;
pub use dependency_map::*;

mod resource_manifest;
pub use resource_manifest::*;

mod resource;
pub use resource::*;

mod asset_meta;
pub use asset_meta::*;
