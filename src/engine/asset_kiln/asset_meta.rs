use base64::Engine;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Formatter};
use std::io::{Read, Write};

pub trait TomlRead: DeserializeOwned
{
    fn load(reader: &mut impl Read) -> Result<Self, Box<dyn std::error::Error + Send + Sync>>
    {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(toml::from_str(&buf)?)
    }
}
pub trait TomlWrite: Serialize
{
    fn save(&self, prettify: bool, writer: &mut impl Write) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let toml = if prettify
        {
            toml::ser::to_string_pretty(self)?
        }
        else
        {
            toml::ser::to_string(self)?
        };
        writer.write_all(toml.as_bytes())?;
        Ok(())
    }
}

// Versions the set of importers that produced a batch of resources
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImporterHash(pub u64);
impl Debug for ImporterHash
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { std::fmt::LowerHex::fmt(&self.0, f) }
}
// custom serialize/deserialize b/c TOML doesn't support u64
impl Serialize for ImporterHash
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    {
        let str = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.0.to_le_bytes());
        str.serialize(serializer)
    }
}
impl<'de> Deserialize<'de> for ImporterHash
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
    {
        let inp = String::deserialize(deserializer)?;
        let mut dec = [0u8; size_of::<u64>()];
        match base64::engine::general_purpose::URL_SAFE_NO_PAD.decode_slice(inp, &mut dec)
        {
            Ok(8) => Ok(ImporterHash(u64::from_le_bytes(dec))),
            Ok(n) => Err(D::Error::custom(format!("expected 8 hash bytes, got {n}"))),
            Err(e) => Err(D::Error::custom(e)),
        }
    }
}
