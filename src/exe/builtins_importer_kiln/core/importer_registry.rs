use super::*;
use crate::importers::{FullTextureSpriteGenerator, SpriteGenerator};
use asset_kiln::ImporterHash;
use std::collections::HashMap;
use unicase::UniCase;

fn short_type_name<T>() -> &'static str
{
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

struct ImporterEntry
{
    name: &'static str,
    importer: Box<dyn ResourceImporter>,
}

// All the importers available to a run, keyed by the source file extensions they read
pub struct ImporterRegistry
{
    version_hash: u64,
    importers: Vec<ImporterEntry>,
    file_ext_to_importer: HashMap<UniCase<&'static str>, usize>,
    sprite_generator: Box<dyn SpriteGenerator>,
}
impl ImporterRegistry
{
    pub fn new() -> Self
    {
        let mut vb = VersionBuilder::new(0);
        vb.append(&[
            b"Initial",
        ]);
        crate::importers::FontImporter::importer_version(&mut vb);

        let mut registry = Self
        {
            version_hash: vb.build_raw(),
            importers: Vec::new(),
            file_ext_to_importer: HashMap::new(),
            sprite_generator: Box::new(FullTextureSpriteGenerator),
        };
        registry.fold_sprite_generator_version();
        registry
    }

    // Plain data, textures and shaders
    pub fn with_default_importers() -> Self
    {
        let mut registry = Self::new();
        registry.add_importer(crate::importers::PlainDataImporter);
        registry.add_importer(crate::importers::TextureImporter);
        registry.add_importer(crate::importers::ShaderImporter);
        registry
    }

    pub fn version_hash(&self) -> ImporterHash { ImporterHash(self.version_hash) }

    fn fold_sprite_generator_version(&mut self)
    {
        let mut vb = VersionBuilder::new(self.version_hash);
        self.sprite_generator.generator_version(&mut vb);
        self.version_hash = vb.build_raw();
    }

    // Register an importer for its extensions. Will panic if a particular extension was already registered
    pub fn add_importer<I: ResourceImporter + ImporterMeta + 'static>(&mut self, importer: I)
    {
        let i_index = self.importers.len();
        self.importers.push(ImporterEntry
        {
            name: short_type_name::<I>(),
            importer: Box::new(importer),
        });

        let mut vb = VersionBuilder::new(self.version_hash);
        vb.push(short_type_name::<I>().as_bytes());
        I::importer_version(&mut vb);
        self.version_hash = vb.build_raw();

        for ext in I::supported_input_file_extensions()
        {
            if let Some(oii) = self.file_ext_to_importer.insert(UniCase::new(ext), i_index)
            {
                panic!("Tried to register importer {} for extension {} that was already registered to {}",
                       short_type_name::<I>(), ext, self.importers[oii].name)
            }
        }
    }

    pub fn set_sprite_generator(&mut self, generator: impl SpriteGenerator + 'static)
    {
        self.sprite_generator = Box::new(generator);
        self.fold_sprite_generator_version();
    }

    pub fn sprite_generator(&self) -> &dyn SpriteGenerator { self.sprite_generator.as_ref() }

    pub fn importer_for(&self, file_extension: &str) -> Option<(&'static str, &dyn ResourceImporter)>
    {
        let index = self.file_ext_to_importer.get(&UniCase::new(file_extension))?;
        let entry = &self.importers[*index];
        Some((entry.name, entry.importer.as_ref()))
    }
}
impl Default for ImporterRegistry
{
    fn default() -> Self { Self::with_default_importers() }
}
