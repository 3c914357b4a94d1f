use asset_kiln::{AssetType, DependencyMap, EntryList, EntryParseError};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use unicase::UniCase;
use walkdir::WalkDir;

#[derive(Debug)]
pub enum EntryStoreError
{
    IOError
    {
        path: PathBuf,
        error: io::Error,
    },
    ParseError
    {
        path: PathBuf,
        error: EntryParseError,
    },
    DependencyParseError
    {
        path: PathBuf,
        error: serde_json::Error,
    },
    SerializeError(serde_json::Error),
    ScanError(walkdir::Error),
}
impl Display for EntryStoreError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for EntryStoreError { }

// None if the file does not exist
fn read_optional(path: &Path) -> Result<Option<String>, EntryStoreError>
{
    match std::fs::read_to_string(path)
    {
        Ok(text) => Ok(Some(text)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(EntryStoreError::IOError { path: path.to_path_buf(), error }),
    }
}

fn write_creating_dirs(path: &Path, text: &str) -> Result<(), EntryStoreError>
{
    let io_err = |error| EntryStoreError::IOError { path: path.to_path_buf(), error };
    if let Some(parent) = path.parent()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, text).map_err(io_err)
}

// A store that does not exist yet is empty
pub fn load_entries(file: impl AsRef<Path>, asset_type: AssetType) -> Result<EntryList, EntryStoreError>
{
    let file = file.as_ref();
    match read_optional(file)?
    {
        Some(json) => EntryList::from_json(&json, asset_type)
            .map_err(|error| EntryStoreError::ParseError { path: file.to_path_buf(), error }),
        None =>
        {
            log::debug!("No entry store at {file:?}, starting with no entries");
            Ok(EntryList::new(asset_type))
        }
    }
}

pub fn save_entries(file: impl AsRef<Path>, entries: &EntryList) -> Result<(), EntryStoreError>
{
    let json = entries.to_json().map_err(EntryStoreError::SerializeError)?;
    write_creating_dirs(file.as_ref(), &json)
}

pub fn load_dependencies(file: impl AsRef<Path>) -> Result<DependencyMap, EntryStoreError>
{
    let file = file.as_ref();
    match read_optional(file)?
    {
        Some(json) => DependencyMap::from_json(&json)
            .map_err(|error| EntryStoreError::DependencyParseError { path: file.to_path_buf(), error }),
        None => Ok(DependencyMap::new()),
    }
}

pub fn save_dependencies(file: impl AsRef<Path>, dependencies: &DependencyMap) -> Result<(), EntryStoreError>
{
    let json = dependencies.to_json().map_err(EntryStoreError::SerializeError)?;
    write_creating_dirs(file.as_ref(), &json)
}

// Append an entry for every file directly in `folder` that no entry references yet.
// Returns true if anything was appended; the caller saves the store
pub fn update_json(folder: impl AsRef<Path>, entries: &mut EntryList) -> Result<bool, EntryStoreError>
{
    update_json_excluding(folder, entries, &[])
}

// Same as update_json, but never picks up the files in `excluded` (e.g. the store itself)
pub fn update_json_excluding(folder: impl AsRef<Path>, entries: &mut EntryList, excluded: &[&Path]) -> Result<bool, EntryStoreError>
{
    let folder = folder.as_ref();
    let extensions = entries.asset_type().discoverable_extensions();

    let mut appended = 0;
    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for dir_entry in walker
    {
        let dir_entry = dir_entry.map_err(EntryStoreError::ScanError)?;
        if !dir_entry.file_type().is_file() { continue; }
        if excluded.iter().any(|e| *e == dir_entry.path()) { continue; }

        let Some(file_name) = dir_entry.file_name().to_str() else
        {
            log::warn!("Skipping {:?}, file name is not valid UTF-8", dir_entry.path());
            continue;
        };
        if file_name.starts_with('.') { continue; }

        if let Some(extensions) = extensions
        {
            let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) else { continue; };
            let ext = UniCase::new(ext);
            if !extensions.iter().any(|e| UniCase::new(*e) == ext) { continue; }
        }

        if entries.contains_path(file_name) { continue; }

        let entry = entries.push_new(file_name);
        log::info!("Discovered new {} entry {:?} ({})",
            entry.asset_type(),
            entry.path(),
            nab_kiln::join_display(", ", entry.uuids()));
        appended += 1;
    }

    Ok(appended > 0)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use asset_kiln::AssetEntry;

    #[test]
    fn discovers_new_files()
    {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tex1.png"), b"x").unwrap();
        std::fs::write(dir.path().join("new.png"), b"x").unwrap();

        let mut entries = EntryList::from_json(r#"[{"UUID": "a1", "Path": "tex1.png"}]"#, AssetType::Normal).unwrap();
        assert!(update_json(dir.path(), &mut entries).unwrap());
        assert_eq!(2, entries.len());

        let AssetEntry::Normal(first) = &entries.entries()[0] else { panic!("not normal"); };
        assert_eq!("a1", first.uuid.as_str());
        let AssetEntry::Normal(added) = &entries.entries()[1] else { panic!("not normal"); };
        assert_eq!("new.png", added.path);
        assert!(!added.uuid.is_empty());
        assert_ne!(first.uuid, added.uuid);
    }

    #[test]
    fn second_discovery_is_noop()
    {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), b"x").unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();

        let mut entries = EntryList::new(AssetType::Sprite);
        assert!(update_json(dir.path(), &mut entries).unwrap());
        let after_first = entries.clone();
        assert_eq!(vec!["a.png", "b.png"], entries.entries().iter().map(|e| e.path()).collect::<Vec<_>>());

        assert!(!update_json(dir.path(), &mut entries).unwrap());
        assert_eq!(after_first, entries);
    }

    #[test]
    fn keeps_missing_entries_and_order()
    {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("c.png"), b"x").unwrap();

        let mut entries = EntryList::from_json(
            r#"[{"UUID": "z", "Path": "gone.png"}, {"UUID": "y", "Path": "also_gone.png"}]"#, AssetType::Normal).unwrap();
        assert!(update_json(dir.path(), &mut entries).unwrap());
        assert_eq!(vec!["gone.png", "also_gone.png", "c.png"], entries.entries().iter().map(|e| e.path()).collect::<Vec<_>>());
    }

    #[test]
    fn filters_by_asset_type()
    {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Roboto.TTF"), b"x").unwrap();
        std::fs::write(dir.path().join("icon.png"), b"x").unwrap();
        std::fs::write(dir.path().join(".hidden.png"), b"x").unwrap();
        std::fs::write(dir.path().join("noext"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("sub.png")).unwrap();
        std::fs::write(dir.path().join("sub.png/nested.png"), b"x").unwrap();

        let mut fonts = EntryList::new(AssetType::Font);
        update_json(dir.path(), &mut fonts).unwrap();
        assert_eq!(vec!["Roboto.TTF"], fonts.entries().iter().map(|e| e.path()).collect::<Vec<_>>());

        let mut sprites = EntryList::new(AssetType::Sprite);
        update_json(dir.path(), &mut sprites).unwrap();
        assert_eq!(vec!["icon.png"], sprites.entries().iter().map(|e| e.path()).collect::<Vec<_>>());

        let mut normal = EntryList::new(AssetType::Normal);
        update_json_excluding(dir.path(), &mut normal, &[&dir.path().join("noext")]).unwrap();
        assert_eq!(vec!["Roboto.TTF", "icon.png"], normal.entries().iter().map(|e| e.path()).collect::<Vec<_>>());
    }

    #[test]
    fn store_roundtrip()
    {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("lists/Sprites.json");

        let missing = load_entries(&file, AssetType::Sprite).unwrap();
        assert!(missing.is_empty());

        let mut entries = EntryList::new(AssetType::Sprite);
        entries.push_new("x.png");
        save_entries(&file, &entries).unwrap();
        assert_eq!(entries, load_entries(&file, AssetType::Sprite).unwrap());

        assert!(matches!(load_entries(&file, AssetType::Normal), Err(EntryStoreError::ParseError { .. })));
    }

    #[test]
    fn dependencies_roundtrip()
    {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Dependencies.json");
        assert!(load_dependencies(&file).unwrap().is_empty());

        let mut deps = DependencyMap::new();
        deps.append("shader.wgsl", vec!["common.wgsl".to_string()]);
        save_dependencies(&file, &deps).unwrap();
        assert_eq!(deps, load_dependencies(&file).unwrap());
    }
}
