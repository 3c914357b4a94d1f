use super::*;
use asset_kiln::ImporterHash;
use chrono::{DateTime, Utc};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationCheck
{
    // Nothing under the folder is newer than the last import
    Unchanged { last_update: DateTime<Utc> },
    // At least one file is newer than the last import
    Stale { last_update: DateTime<Utc> },
    // Never imported (or the previous import can't be trusted), everything is stale
    Missing,
}
impl ModificationCheck
{
    pub fn last_update_time(&self) -> Option<DateTime<Utc>>
    {
        match self
        {
            ModificationCheck::Unchanged { last_update } |
            ModificationCheck::Stale { last_update } => Some(*last_update),
            ModificationCheck::Missing => None,
        }
    }
}

// None if the file does not exist or its time can't be read
pub fn file_modified_time(path: impl AsRef<Path>) -> Option<DateTime<Utc>>
{
    let modified = std::fs::metadata(path.as_ref()).and_then(|m| m.modified()).ok()?;
    Some(DateTime::<Utc>::from(modified))
}

// Compare everything under `folder` (recursively) against the stored timestamp.
// Directories count too, so files copied in with old times still mark the folder stale
pub fn check_for_modifications(folder: impl AsRef<Path>, timestamp_file: impl AsRef<Path>, importers_version: ImporterHash) -> ModificationCheck
{
    let timestamp_file = timestamp_file.as_ref();
    let timestamp = match read_timestamp(timestamp_file)
    {
        Ok(Some(timestamp)) => timestamp,
        Ok(None) => return ModificationCheck::Missing,
        Err(err) =>
        {
            log::error!("Failed to read import timestamp {timestamp_file:?}, reimporting everything: {err}");
            return ModificationCheck::Missing;
        }
    };

    if timestamp.importers_version != importers_version
    {
        log::info!("Importers changed since the last import ({:?} -> {:?}), reimporting everything",
            timestamp.importers_version, importers_version);
        return ModificationCheck::Missing;
    }

    let last_update = timestamp.last_import;
    for entry in WalkDir::new(folder.as_ref())
    {
        let entry = match entry
        {
            Ok(entry) => entry,
            Err(err) =>
            {
                log::warn!("Failed to scan {:?} for modifications: {err}", folder.as_ref());
                return ModificationCheck::Stale { last_update };
            }
        };

        if entry.path() == timestamp_file { continue; }

        let modified = entry.metadata().ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);
        match modified
        {
            Some(modified) if modified > last_update =>
            {
                log::debug!("{:?} modified since last import", entry.path());
                return ModificationCheck::Stale { last_update };
            }
            Some(_) => { }
            None =>
            {
                log::warn!("Could not read the modification time of {:?}", entry.path());
                return ModificationCheck::Stale { last_update };
            }
        }
    }

    ModificationCheck::Unchanged { last_update }
}
