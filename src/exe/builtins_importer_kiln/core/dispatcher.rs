use super::*;
use super::font_import::build_font;
use crate::importers::FontImportError;
use asset_kiln::{AssetEntry, DependencyMap, EntryList, Resource, ResourceFile, ResourceFileError, ResourceManifest, ResourceUuid, RESOURCE_FILE_EXTENSION};
use nab_kiln::normalize_rel_path;
use rayon::prelude::*;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ImportError
{
    MissingSourceFile(PathBuf),
    NoImporter { extension: String },
    ReadError
    {
        path: PathBuf,
        error: io::Error,
    },
    ImporterFailed
    {
        importer: &'static str,
        error: Box<dyn Error + Send + Sync>,
    },
    WrongResourceKind
    {
        expected: &'static str,
        actual: &'static str,
    },
    SpriteFailed(Box<dyn Error + Send + Sync>),
    FontFailed(FontImportError),
    InvalidShader(String),
    WriteError
    {
        path: PathBuf,
        error: ResourceFileError,
    },
}
impl Display for ImportError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for ImportError { }

#[derive(Debug)]
pub struct EntryFailure
{
    pub index: usize,
    pub path: String,
    pub error: ImportError,
}

#[derive(Debug, Default)]
pub struct ImportReport
{
    pub imported: usize,
    pub skipped: usize,
    pub failures: Vec<EntryFailure>,
    // the dependency map was modified and should be saved
    pub dependencies_changed: bool,
}
impl ImportReport
{
    pub fn is_success(&self) -> bool { self.failures.is_empty() }
}

// Receives the dependencies importers report, stored relative to `folder` when inside it.
// Reported dependencies are added to what the entry already declares, never replacing it
pub struct DependencySink<'d>
{
    pub map: &'d mut DependencyMap,
    pub folder: &'d Path,
}
impl<'d> DependencySink<'d>
{
    pub fn new(map: &'d mut DependencyMap, folder: &'d Path) -> Self { Self { map, folder } }

    fn record(&mut self, entry_path: &str, dependencies: &[PathBuf]) -> bool
    {
        let relative = dependencies.iter().map(|dep| match dep.strip_prefix(self.folder)
        {
            Ok(rel) => normalize_rel_path(&rel.to_string_lossy()),
            Err(_) => dep.to_string_lossy().to_string(),
        });
        self.map.append(normalize_rel_path(entry_path), relative)
    }
}

// Everything one entry produced, merged into the manifest once the whole batch ran
struct EntryOutcome
{
    registrations: Vec<(ResourceUuid, PathBuf)>,
    dependencies: Option<Vec<PathBuf>>,
}

// `<output>/<dir>/<prefix><file name>.asset`
fn output_file_path(output_folder: &Path, rel_path: &str, prefix: &str) -> PathBuf
{
    let normalized = normalize_rel_path(rel_path);
    let file_name = format!("{prefix}{}.{RESOURCE_FILE_EXTENSION}", normalized.rsplit('/').next().unwrap_or(""));
    match normalized.rsplit_once('/')
    {
        Some((dir, _)) => output_folder.join(dir).join(file_name),
        None => output_folder.join(file_name),
    }
}

// Fonts are named by their full source path, so `a.ttf` and `a.otf` don't share an output
fn font_output_name(rel_path: &str) -> String
{
    normalize_rel_path(rel_path)
}

fn write_resource(path: &Path, uuid: &ResourceUuid, resource: Resource) -> Result<(), ImportError>
{
    ResourceFile::new(uuid.clone(), resource)
        .save(path)
        .map_err(|error| ImportError::WriteError { path: path.to_path_buf(), error })
}

// Runs the importers for flagged entries and records what they produced
pub struct AssetImporter
{
    importers: ImporterRegistry,
    parallel: bool,
}
impl AssetImporter
{
    pub fn new(importers: ImporterRegistry) -> Self
    {
        Self { importers, parallel: false }
    }

    // Import entries on the rayon pool. Results are merged in entry order either way
    pub fn set_parallel(&mut self, parallel: bool) { self.parallel = parallel; }

    pub fn importers(&self) -> &ImporterRegistry { &self.importers }

    // Import every entry whose flag is set. Failures are reported per entry and never stop the batch.
    // Will panic if the flags were not generated for these entries
    pub fn import_assets(
        &self,
        entries: &EntryList,
        flags: &ImportFlags,
        input_folder: &Path,
        output_folder: &Path,
        manifest: &mut dyn ResourceManifest,
        mut dependencies: Option<DependencySink>) -> ImportReport
    {
        assert_eq!(entries.len(), flags.len(), "Import flags do not match the entries");

        let mut report = ImportReport
        {
            skipped: flags.len() - flags.count_set(),
            ..Default::default()
        };

        let flagged: Vec<usize> = flags.set_indices().collect();
        let import_one = |index: &usize|
        {
            (*index, self.import_entry(&entries.entries()[*index], input_folder, output_folder))
        };
        let outcomes: Vec<_> = match self.parallel
        {
            true => flagged.par_iter().map(import_one).collect(),
            false => flagged.iter().map(import_one).collect(),
        };

        for (index, outcome) in outcomes
        {
            let entry = &entries.entries()[index];
            match outcome
            {
                Ok(outcome) =>
                {
                    for (uuid, path) in &outcome.registrations
                    {
                        manifest.register(uuid, path);
                    }
                    if let (Some(sink), Some(deps)) = (dependencies.as_mut(), &outcome.dependencies)
                    {
                        report.dependencies_changed |= sink.record(entry.path(), deps);
                    }
                    report.imported += 1;
                }
                Err(error) =>
                {
                    log::error!("Failed to import {} entry {index} ({:?}): {error}", entry.asset_type(), entry.path());
                    report.failures.push(EntryFailure
                    {
                        index,
                        path: entry.path().to_string(),
                        error,
                    });
                }
            }
        }

        log::info!("Imported {} of {} {} entries from {input_folder:?} ({} up to date, {} failed)",
            report.imported,
            entries.len(),
            entries.asset_type(),
            report.skipped,
            report.failures.len());
        report
    }

    fn import_source(&self, source_path: &Path, rel_path: &str) -> Result<ImportedResource, ImportError>
    {
        if !source_path.is_file()
        {
            return Err(ImportError::MissingSourceFile(source_path.to_path_buf()));
        }

        let mut input = SourceInput::open(source_path, rel_path)
            .map_err(|error| ImportError::ReadError { path: source_path.to_path_buf(), error })?;
        let Some((importer_name, importer)) = self.importers.importer_for(input.file_extension()) else
        {
            return Err(ImportError::NoImporter { extension: input.file_extension().as_str().to_string() });
        };

        log::debug!("Importing {:?} with {importer_name}", input.rel_path());
        importer.import(&mut input)
            .map_err(|error| ImportError::ImporterFailed { importer: importer_name, error })
    }

    fn import_entry(&self, entry: &AssetEntry, input_folder: &Path, output_folder: &Path) -> Result<EntryOutcome, ImportError>
    {
        let source_path = input_folder.join(entry.path());
        match entry
        {
            AssetEntry::Normal(normal) =>
            {
                let imported = self.import_source(&source_path, &normal.path)?;
                if let Resource::Shader(shader) = &imported.resource
                {
                    if !verify_and_report_shader(shader)
                    {
                        return Err(ImportError::InvalidShader(shader.name.clone()));
                    }
                }

                let output_path = output_file_path(output_folder, &normal.path, "");
                write_resource(&output_path, &normal.uuid, imported.resource)?;
                Ok(EntryOutcome
                {
                    registrations: vec![(normal.uuid.clone(), output_path)],
                    dependencies: imported.dependencies,
                })
            }
            AssetEntry::Sprite(sprite) =>
            {
                let imported = self.import_source(&source_path, &sprite.path)?;
                let texture = match imported.resource
                {
                    Resource::Texture(texture) => texture,
                    other => return Err(ImportError::WrongResourceKind { expected: "texture", actual: other.kind_name() }),
                };
                let sprite_resource = self.importers.sprite_generator()
                    .generate(&sprite.texture_uuid, &texture)
                    .map_err(ImportError::SpriteFailed)?;

                // nothing is registered unless both files were written
                let texture_output = output_file_path(output_folder, &sprite.path, "");
                let sprite_output = output_file_path(output_folder, &sprite.path, "sprite_");
                write_resource(&texture_output, &sprite.texture_uuid, Resource::Texture(texture))?;
                write_resource(&sprite_output, &sprite.sprite_uuid, Resource::Sprite(sprite_resource))?;

                Ok(EntryOutcome
                {
                    registrations: vec![
                        (sprite.texture_uuid.clone(), texture_output),
                        (sprite.sprite_uuid.clone(), sprite_output),
                    ],
                    dependencies: imported.dependencies,
                })
            }
            AssetEntry::Font(font) =>
            {
                let output_path = build_font(
                    &source_path,
                    &font_output_name(&font.path),
                    output_folder,
                    &font.sizes,
                    font.antialiasing,
                    &font.uuid)?;
                Ok(EntryOutcome
                {
                    registrations: vec![(font.uuid.clone(), output_path)],
                    dependencies: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::helpers::shader_compiler::TEST_SHADER;
    use crate::importers::font_importer::fake_truetype;
    use crate::importers::SpriteGenerator;
    use asset_kiln::{AssetType, ResourceManifestFile, SpriteResource, TextureResource};

    struct FailingSpriteGenerator;
    impl SpriteGenerator for FailingSpriteGenerator
    {
        fn generate(&self, _texture_uuid: &ResourceUuid, _texture: &TextureResource) -> ImporterResult<SpriteResource>
        {
            Err("no sprites today".into())
        }
        fn generator_version(&self, vb: &mut VersionBuilder) { vb.push(b"Failing"); }
    }

    fn write_png(path: &Path)
    {
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255])).save(path).unwrap();
    }

    fn load(path: &Path) -> Resource
    {
        ResourceFile::load(path).unwrap().resource
    }

    #[test]
    fn failed_entry_does_not_stop_batch()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a.txt"), b"hello").unwrap();

        let entries = EntryList::from_json(r#"[{"UUID": "a1", "Path": "a.txt"}, {"UUID": "a2", "Path": "b.txt"}]"#, AssetType::Normal).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::all(2, true), input.path(), output.path(), &mut manifest, None);

        assert!(!report.is_success());
        assert_eq!(1, report.imported);
        assert_eq!(1, report.failures.len());
        assert_eq!(1, report.failures[0].index);
        assert!(matches!(report.failures[0].error, ImportError::MissingSourceFile(_)));

        let a1_path = manifest.lookup(&ResourceUuid::from("a1")).unwrap().to_path_buf();
        assert_eq!(output.path().join("a.txt.asset"), a1_path);
        assert_eq!(None, manifest.lookup(&ResourceUuid::from("a2")));
        let Resource::PlainData(data) = load(&a1_path) else { panic!("not plain data"); };
        assert_eq!(b"hello".to_vec(), data.bytes);
    }

    #[test]
    fn unflagged_entries_untouched()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a.txt"), b"a").unwrap();
        std::fs::write(input.path().join("b.txt"), b"b").unwrap();

        let entries = EntryList::from_json(r#"[{"UUID": "a1", "Path": "a.txt"}, {"UUID": "a2", "Path": "b.txt"}]"#, AssetType::Normal).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::from(vec![false, true]), input.path(), output.path(), &mut manifest, None);

        assert!(report.is_success());
        assert_eq!((1, 1), (report.imported, report.skipped));
        assert_eq!(None, manifest.lookup(&ResourceUuid::from("a1")));
        assert!(manifest.lookup(&ResourceUuid::from("a2")).is_some());
        assert!(!output.path().join("a.txt.asset").exists());

        let mut untouched = ResourceManifestFile::new("test");
        let report = importer.import_assets(&entries, &ImportFlags::all(2, false), input.path(), output.path(), &mut untouched, None);
        assert_eq!((0, 2), (report.imported, report.skipped));
        assert!(untouched.is_empty());
        assert!(!untouched.is_dirty());
    }

    #[test]
    fn sprite_registers_texture_and_sprite()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::create_dir(input.path().join("icons")).unwrap();
        write_png(&input.path().join("icons/x.png"));

        let entries = EntryList::from_json(r#"[{"TextureUUID": "t1", "Path": "icons/x.png", "SpriteUUID": "s1"}]"#, AssetType::Sprite).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::all(1, true), input.path(), output.path(), &mut manifest, None);
        assert!(report.is_success());

        let texture_path = manifest.lookup(&ResourceUuid::from("t1")).unwrap().to_path_buf();
        let sprite_path = manifest.lookup(&ResourceUuid::from("s1")).unwrap().to_path_buf();
        assert_eq!(output.path().join("icons/x.png.asset"), texture_path);
        assert_eq!(output.path().join("icons/sprite_x.png.asset"), sprite_path);

        let Resource::Texture(texture) = load(&texture_path) else { panic!("not a texture"); };
        assert_eq!((4, 2), (texture.width, texture.height));
        let Resource::Sprite(sprite) = load(&sprite_path) else { panic!("not a sprite"); };
        assert_eq!(ResourceUuid::from("t1"), sprite.texture);
    }

    #[test]
    fn failed_sprite_registers_nothing()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_png(&input.path().join("x.png"));

        let entries = EntryList::from_json(r#"[{"TextureUUID": "t1", "Path": "x.png", "SpriteUUID": "s1"}]"#, AssetType::Sprite).unwrap();
        let mut registry = ImporterRegistry::with_default_importers();
        registry.set_sprite_generator(FailingSpriteGenerator);
        let importer = AssetImporter::new(registry);

        let mut manifest = ResourceManifestFile::new("test");
        let report = importer.import_assets(&entries, &ImportFlags::all(1, true), input.path(), output.path(), &mut manifest, None);
        assert!(matches!(report.failures[0].error, ImportError::SpriteFailed(_)));
        assert_eq!(None, manifest.lookup(&ResourceUuid::from("t1")));
        assert_eq!(None, manifest.lookup(&ResourceUuid::from("s1")));
    }

    #[test]
    fn sprite_needs_texture()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("x.txt"), b"x").unwrap();

        let entries = EntryList::from_json(r#"[{"TextureUUID": "t1", "Path": "x.txt", "SpriteUUID": "s1"}]"#, AssetType::Sprite).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::all(1, true), input.path(), output.path(), &mut manifest, None);
        assert!(matches!(report.failures[0].error, ImportError::WrongResourceKind { expected: "texture", .. }));
        assert!(manifest.is_empty());
    }

    #[test]
    fn font_entries()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("Roboto.ttf"), fake_truetype()).unwrap();

        let entries = EntryList::from_json(r#"[{"UUID": "f1", "Path": "Roboto.ttf", "Sizes": [12, 24], "Antialiasing": false}]"#, AssetType::Font).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::all(1, true), input.path(), output.path(), &mut manifest, None);
        assert!(report.is_success());

        let font_path = manifest.lookup(&ResourceUuid::from("f1")).unwrap().to_path_buf();
        assert_eq!(output.path().join("Roboto.ttf.asset"), font_path);
        let Resource::Font(font) = load(&font_path) else { panic!("not a font"); };
        assert!(!font.antialiasing);
        assert_eq!(vec![12, 24], font.variants.iter().map(|v| v.size).collect::<Vec<_>>());
    }

    #[test]
    fn fonts_differing_by_extension_keep_separate_outputs()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("Roboto.ttf"), fake_truetype()).unwrap();
        std::fs::write(input.path().join("Roboto.otf"), fake_truetype()).unwrap();

        let entries = EntryList::from_json(
            r#"[{"UUID": "f1", "Path": "Roboto.ttf", "Sizes": [12]}, {"UUID": "f2", "Path": "Roboto.otf", "Sizes": [24]}]"#,
            AssetType::Font).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::all(2, true), input.path(), output.path(), &mut manifest, None);
        assert!(report.is_success());

        let ttf_path = manifest.lookup(&ResourceUuid::from("f1")).unwrap().to_path_buf();
        let otf_path = manifest.lookup(&ResourceUuid::from("f2")).unwrap().to_path_buf();
        assert_ne!(ttf_path, otf_path);
        let Resource::Font(ttf) = load(&ttf_path) else { panic!("not a font"); };
        let Resource::Font(otf) = load(&otf_path) else { panic!("not a font"); };
        assert_eq!(vec![12], ttf.variants.iter().map(|v| v.size).collect::<Vec<_>>());
        assert_eq!(vec![24], otf.variants.iter().map(|v| v.size).collect::<Vec<_>>());
    }

    #[test]
    fn invalid_shader_not_saved()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("broken.wgsl"), "fn nope( {").unwrap();
        std::fs::write(input.path().join("model.fbx"), b"x").unwrap();

        let entries = EntryList::from_json(r#"[{"UUID": "b1", "Path": "broken.wgsl"}, {"UUID": "m1", "Path": "model.fbx"}]"#, AssetType::Normal).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let report = importer.import_assets(&entries, &ImportFlags::all(2, true), input.path(), output.path(), &mut manifest, None);

        assert!(matches!(report.failures[0].error, ImportError::InvalidShader(_)));
        assert!(matches!(&report.failures[1].error, ImportError::NoImporter { extension } if extension == "fbx"));
        assert!(manifest.is_empty());
        assert!(!output.path().join("broken.wgsl.asset").exists());
    }

    #[test]
    fn shader_includes_recorded()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("common.wgsl"), "const SCALE: f32 = 2.0;\n").unwrap();
        std::fs::write(input.path().join("main.wgsl"), format!("#include \"common.wgsl\"\n{TEST_SHADER}")).unwrap();

        let entries = EntryList::from_json(r#"[{"UUID": "sh1", "Path": "main.wgsl"}]"#, AssetType::Normal).unwrap();
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let mut manifest = ResourceManifestFile::new("test");
        let mut deps = DependencyMap::new();

        let report = importer.import_assets(&entries, &ImportFlags::all(1, true), input.path(), output.path(), &mut manifest,
            Some(DependencySink::new(&mut deps, input.path())));
        assert!(report.is_success());
        assert!(report.dependencies_changed);
        assert_eq!(Some(["common.wgsl".to_string()].as_slice()), deps.get("main.wgsl"));

        let report = importer.import_assets(&entries, &ImportFlags::all(1, true), input.path(), output.path(), &mut manifest,
            Some(DependencySink::new(&mut deps, input.path())));
        assert!(!report.dependencies_changed);
    }

    #[test]
    fn declared_dependencies_survive_import()
    {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("plain.wgsl"), TEST_SHADER).unwrap();
        std::fs::write(input.path().join("common.wgsl"), "const SCALE: f32 = 2.0;\n").unwrap();
        std::fs::write(input.path().join("main.wgsl"), format!("#include \"common.wgsl\"\n{TEST_SHADER}")).unwrap();

        let entries = EntryList::from_json(
            r#"[{"UUID": "sh0", "Path": "plain.wgsl"}, {"UUID": "sh1", "Path": "main.wgsl"}]"#,
            AssetType::Normal).unwrap();
        let importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let mut manifest = ResourceManifestFile::new("test");
        let mut deps = DependencyMap::from_json(r#"{"plain.wgsl": ["palette.json"], "main.wgsl": ["palette.json"]}"#).unwrap();

        let report = importer.import_assets(&entries, &ImportFlags::all(2, true), input.path(), output.path(), &mut manifest,
            Some(DependencySink::new(&mut deps, input.path())));
        assert!(report.is_success());
        assert!(report.dependencies_changed);

        // an include-free shader keeps its declared list untouched
        assert_eq!(Some(["palette.json".to_string()].as_slice()), deps.get("plain.wgsl"));
        assert_eq!(Some(["palette.json".to_string(), "common.wgsl".to_string()].as_slice()), deps.get("main.wgsl"));
    }

    #[test]
    fn parallel_matches_sequential()
    {
        let input = tempfile::tempdir().unwrap();
        let mut json = Vec::new();
        for i in 0..16
        {
            std::fs::write(input.path().join(format!("file{i}.txt")), format!("{i}")).unwrap();
            json.push(format!(r#"{{"UUID": "u{i}", "Path": "file{i}.txt"}}"#));
        }
        json.push(r#"{"UUID": "missing", "Path": "missing.txt"}"#.to_string());
        let entries = EntryList::from_json(&format!("[{}]", json.join(",")), AssetType::Normal).unwrap();
        let flags = ImportFlags::all(entries.len(), true);

        let mut importer = AssetImporter::new(ImporterRegistry::with_default_importers());
        let sequential_out = tempfile::tempdir().unwrap();
        let mut sequential = ResourceManifestFile::new("test");
        let sequential_report = importer.import_assets(&entries, &flags, input.path(), sequential_out.path(), &mut sequential, None);

        importer.set_parallel(true);
        let parallel_out = tempfile::tempdir().unwrap();
        let mut parallel = ResourceManifestFile::new("test");
        let parallel_report = importer.import_assets(&entries, &flags, input.path(), parallel_out.path(), &mut parallel, None);

        assert_eq!(sequential_report.imported, parallel_report.imported);
        assert_eq!(16, parallel.len());
        assert_eq!(vec![16], parallel_report.failures.iter().map(|f| f.index).collect::<Vec<_>>());
        for (uuid, path) in sequential.iter()
        {
            let relative = path.strip_prefix(sequential_out.path()).unwrap();
            assert_eq!(Some(parallel_out.path().join(relative).as_path()), parallel.lookup(uuid));
        }
    }

    #[test]
    #[should_panic]
    fn mismatched_flags_panic()
    {
        let dir = tempfile::tempdir().unwrap();
        let entries = EntryList::from_json(r#"[{"UUID": "a1", "Path": "a.txt"}]"#, AssetType::Normal).unwrap();
        let mut manifest = ResourceManifestFile::new("test");
        AssetImporter::new(ImporterRegistry::new())
            .import_assets(&entries, &ImportFlags::all(2, true), dir.path(), dir.path(), &mut manifest, None);
    }
}
