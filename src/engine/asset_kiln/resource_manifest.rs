use crate::{ResourceUuid, TomlRead, TomlWrite};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// Maps resource IDs to where their imported files live. Owned by the caller for the whole session,
// importers only ever add to it
pub trait ResourceManifest
{
    // Registering an already-known ID overwrites its path
    fn register(&mut self, uuid: &ResourceUuid, path: &Path);
    fn lookup(&self, uuid: &ResourceUuid) -> Option<&Path>;
}

#[derive(Debug)]
pub enum ManifestError
{
    IOError(io::Error),
    ParseError(Box<dyn Error + Send + Sync>),
    SerializeError(Box<dyn Error + Send + Sync>),
}
impl Display for ManifestError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for ManifestError { }

// A manifest persisted as a TOML table of ID -> path
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResourceManifestFile
{
    pub name: String,
    resources: BTreeMap<ResourceUuid, PathBuf>,
    #[serde(skip)]
    dirty: bool,
}
impl TomlRead for ResourceManifestFile { }
impl TomlWrite for ResourceManifestFile { }
impl ResourceManifestFile
{
    pub fn new(name: impl Into<String>) -> Self
    {
        Self
        {
            name: name.into(),
            resources: BTreeMap::new(),
            dirty: false,
        }
    }

    // Load a manifest, or start an empty one if the file does not exist yet
    pub fn load_or_new(file: impl AsRef<Path>, name: &str) -> Result<Self, ManifestError>
    {
        match File::open(file.as_ref())
        {
            Ok(mut fin) => Self::load(&mut fin).map_err(ManifestError::ParseError),
            Err(err) if err.kind() == ErrorKind::NotFound =>
            {
                log::debug!("No resource manifest at {:?}, starting a new one", file.as_ref());
                Ok(Self::new(name))
            },
            Err(err) => Err(ManifestError::IOError(err)),
        }
    }

    // Written to a temp file first, the old manifest stays intact until the rename
    pub fn save_to(&mut self, file: impl AsRef<Path>) -> Result<(), ManifestError>
    {
        let file = file.as_ref();
        if let Some(parent) = file.parent()
        {
            std::fs::create_dir_all(parent).map_err(ManifestError::IOError)?;
        }

        let temp_file = Self::temp_path(file);
        {
            let mut fout = File::create(&temp_file).map_err(ManifestError::IOError)?;
            self.save(true, &mut fout).map_err(ManifestError::SerializeError)?;
            fout.sync_all().map_err(ManifestError::IOError)?;
        }
        std::fs::rename(&temp_file, file).map_err(|err|
        {
            let _ = std::fs::remove_file(&temp_file);
            ManifestError::IOError(err)
        })?;

        self.dirty = false;
        Ok(())
    }

    fn temp_path(file: &Path) -> PathBuf
    {
        let mut name = file.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        file.with_file_name(name)
    }

    pub fn len(&self) -> usize { self.resources.len() }
    pub fn is_empty(&self) -> bool { self.resources.is_empty() }
    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn iter(&self) -> impl Iterator<Item=(&ResourceUuid, &Path)>
    {
        self.resources.iter().map(|(u, p)| (u, p.as_path()))
    }
}
impl ResourceManifest for ResourceManifestFile
{
    fn register(&mut self, uuid: &ResourceUuid, path: &Path)
    {
        if self.resources.get(uuid).is_some_and(|p| p == path) { return; }
        self.resources.insert(uuid.clone(), path.to_path_buf());
        self.dirty = true;
    }

    fn lookup(&self, uuid: &ResourceUuid) -> Option<&Path>
    {
        self.resources.get(uuid).map(|p| p.as_path())
    }
}
