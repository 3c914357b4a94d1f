use asset_kiln::{AssetType, TomlRead};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError
{
    IOError
    {
        path: PathBuf,
        error: io::Error,
    },
    ParseError
    {
        path: PathBuf,
        error: Box<dyn Error + Send + Sync>,
    },
    DuplicateGroup(String),
}
impl Display for ConfigError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for ConfigError { }

fn default_auto_discover() -> bool { true }

// One entry store and the folders its entries are imported from and to
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig
{
    pub name: String,
    pub asset_type: AssetType,
    // JSON entry store
    pub entries: PathBuf,
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    // JSON dependency map
    #[serde(default)]
    pub dependencies: Option<PathBuf>,
    // where dependency paths resolve, the input folder if not set
    #[serde(default)]
    pub dependency_folder: Option<PathBuf>,
    #[serde(default = "default_auto_discover")]
    pub auto_discover: bool,
}
impl GroupConfig
{
    pub fn dependency_folder(&self) -> &Path
    {
        self.dependency_folder.as_deref().unwrap_or(&self.input_folder)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuiltinsConfig
{
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub timestamp_file: PathBuf,
    pub manifest_file: PathBuf,
    #[serde(rename = "group", default)]
    pub groups: Vec<GroupConfig>,
}
impl TomlRead for BuiltinsConfig { }
impl BuiltinsConfig
{
    // Load a config and make all of its paths absolute.
    // The roots resolve against the config file's folder, everything else against the roots
    pub fn load_file(file: impl AsRef<Path>) -> Result<Self, ConfigError>
    {
        let file = file.as_ref();
        let mut fin = File::open(file)
            .map_err(|error| ConfigError::IOError { path: file.to_path_buf(), error })?;
        let mut config = Self::load(&mut fin)
            .map_err(|error| ConfigError::ParseError { path: file.to_path_buf(), error })?;

        let base_dir = match file.parent()
        {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        config.resolve_paths(&base_dir);
        config.check_groups()?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: &Path)
    {
        self.input_root = base_dir.join(&self.input_root);
        self.output_root = base_dir.join(&self.output_root);
        self.timestamp_file = self.output_root.join(&self.timestamp_file);
        self.manifest_file = self.output_root.join(&self.manifest_file);

        for group in &mut self.groups
        {
            group.entries = self.input_root.join(&group.entries);
            group.input_folder = self.input_root.join(&group.input_folder);
            group.output_folder = self.output_root.join(&group.output_folder);
            group.dependencies = group.dependencies.as_ref().map(|d| self.input_root.join(d));
            group.dependency_folder = group.dependency_folder.as_ref().map(|d| self.input_root.join(d));
        }
    }

    fn check_groups(&self) -> Result<(), ConfigError>
    {
        let mut names = HashSet::new();
        for group in &self.groups
        {
            if !names.insert(group.name.as_str())
            {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }
        }
        Ok(())
    }
}
