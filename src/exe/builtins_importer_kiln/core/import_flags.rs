use super::*;
use asset_kiln::{AssetEntry, DependencyMap, EntryList};
use chrono::{DateTime, Utc};
use nab_kiln::normalize_rel_path;
use std::ops::Deref;
use std::path::Path;

// One flag per entry, in entry order. A set flag means the entry gets (re)imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFlags(Vec<bool>);
impl ImportFlags
{
    pub fn all(count: usize, value: bool) -> Self { Self(vec![value; count]) }

    pub fn mark(&mut self, index: usize) { self.0[index] = true; }

    pub fn count_set(&self) -> usize { self.0.iter().filter(|f| **f).count() }

    pub fn set_indices(&self) -> impl Iterator<Item=usize> + '_
    {
        self.0.iter().enumerate().filter(|(_, f)| **f).map(|(i, _)| i)
    }
}
impl Deref for ImportFlags
{
    type Target = [bool];
    fn deref(&self) -> &Self::Target { &self.0 }
}
impl From<Vec<bool>> for ImportFlags
{
    fn from(flags: Vec<bool>) -> Self { Self(flags) }
}

// Declared dependencies and the folder their relative paths resolve against
#[derive(Debug, Clone, Copy)]
pub struct DependencyLookup<'d>
{
    pub map: &'d DependencyMap,
    pub folder: &'d Path,
}
impl<'d> DependencyLookup<'d>
{
    pub fn new(map: &'d DependencyMap, folder: &'d Path) -> Self { Self { map, folder } }

    // Entries are keyed by their path as written, their normalized path, and any of their IDs.
    // Lists under every matching key count
    pub fn dependencies_of(&self, entry: &AssetEntry) -> Vec<&'d str>
    {
        let normalized = normalize_rel_path(entry.path());
        let uuids = entry.uuids();
        let keys = [entry.path(), normalized.as_str()].into_iter()
            .chain(uuids.iter().map(|u| u.as_str()));
        self.map.collect(keys)
    }
}

// True if any dependency is newer than the last update. Missing dependencies count as changed
pub fn dependencies_changed<D: AsRef<Path>>(dependencies: &[D], dependency_folder: &Path, last_update: DateTime<Utc>) -> bool
{
    for dependency in dependencies
    {
        let path = dependency_folder.join(dependency);
        match file_modified_time(&path)
        {
            Some(modified) if modified > last_update =>
            {
                log::debug!("Dependency {path:?} modified since last import");
                return true;
            }
            Some(_) => { }
            None =>
            {
                log::warn!("Dependency {path:?} is missing, forcing reimport");
                return true;
            }
        }
    }
    false
}

// Decide which entries need importing. `last_update` of None means nothing was imported before
pub fn generate_import_flags(
    entries: &EntryList,
    input_folder: &Path,
    last_update: Option<DateTime<Utc>>,
    force_import: bool,
    dependencies: Option<DependencyLookup>) -> ImportFlags
{
    if force_import
    {
        return ImportFlags::all(entries.len(), true);
    }
    let Some(last_update) = last_update else
    {
        return ImportFlags::all(entries.len(), true);
    };

    let flags = entries.entries().iter().map(|entry|
    {
        let source = input_folder.join(entry.path());
        match file_modified_time(&source)
        {
            // the import step reports the missing file
            None => return true,
            Some(modified) if modified > last_update => return true,
            Some(_) => { }
        }

        dependencies.is_some_and(|lookup|
            dependencies_changed(&lookup.dependencies_of(entry), lookup.folder, last_update))
    }).collect::<Vec<_>>();

    ImportFlags(flags)
}
