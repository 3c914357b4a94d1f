use asset_kiln::{ImporterHash, TomlRead, TomlWrite};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug)]
pub enum TimestampError
{
    IOError(io::Error),
    ParseError(Box<dyn Error + Send + Sync>),
    SerializeError(Box<dyn Error + Send + Sync>),
}
impl Display for TimestampError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for TimestampError { }

// When the last fully successful import happened, and with which importers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTimestamp
{
    pub last_import: DateTime<Utc>,
    pub importers_version: ImporterHash,
}
impl TomlRead for ImportTimestamp { }
impl TomlWrite for ImportTimestamp { }

// Write the current time to the timestamp file
pub fn write_timestamp(file: impl AsRef<Path>, importers_version: ImporterHash) -> Result<(), TimestampError>
{
    write_timestamp_at(file, Utc::now(), importers_version)
}

// Replaces the file contents all or nothing, the previous timestamp survives a failed write
pub fn write_timestamp_at(file: impl AsRef<Path>, instant: DateTime<Utc>, importers_version: ImporterHash) -> Result<(), TimestampError>
{
    let file = file.as_ref();
    if let Some(parent) = file.parent()
    {
        std::fs::create_dir_all(parent).map_err(TimestampError::IOError)?;
    }

    let timestamp = ImportTimestamp { last_import: instant, importers_version };
    let temp_file = file.with_extension("tmp");
    {
        let mut fout = File::create(&temp_file).map_err(TimestampError::IOError)?;
        timestamp.save(false, &mut fout).map_err(TimestampError::SerializeError)?;
        fout.sync_all().map_err(TimestampError::IOError)?;
    }

    std::fs::rename(&temp_file, file).map_err(|err|
    {
        let _ = std::fs::remove_file(&temp_file);
        TimestampError::IOError(err)
    })
}

// None if no timestamp was ever written
pub fn read_timestamp(file: impl AsRef<Path>) -> Result<Option<ImportTimestamp>, TimestampError>
{
    match File::open(file.as_ref())
    {
        Ok(mut fin) => ImportTimestamp::load(&mut fin).map(Some).map_err(TimestampError::ParseError),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(TimestampError::IOError(err)),
    }
}
