use crate::ResourceUuid;
use nab_kiln::normalize_rel_path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub const TEXTURE_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga"];
pub const FONT_FILE_EXTENSIONS: &[&str] = &["ttf", "otf"];
pub const DEFAULT_FONT_SIZES: &[u32] = &[8, 16];

// Controls the schema of the entries in a list and how each of them gets imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType
{
    // Imported as-is, one resource per entry
    Normal,
    // Imported as a texture, plus a sprite generated from that texture
    Sprite,
    // Imported as a single font resource with one variant per size
    Font,
}
impl AssetType
{
    // Extensions auto-discovery will pick up (omit . prefix), None for any non-hidden file
    pub fn discoverable_extensions(self) -> Option<&'static [&'static str]>
    {
        match self
        {
            AssetType::Normal => None,
            AssetType::Sprite => Some(TEXTURE_FILE_EXTENSIONS),
            AssetType::Font => Some(FONT_FILE_EXTENSIONS),
        }
    }

    // Create a brand-new entry for a source file, with freshly generated IDs
    #[must_use]
    pub fn new_entry(self, path: impl Into<String>) -> AssetEntry
    {
        let path = path.into();
        match self
        {
            AssetType::Normal => AssetEntry::Normal(NormalEntry
            {
                uuid: ResourceUuid::generate(),
                path,
            }),
            AssetType::Sprite => AssetEntry::Sprite(SpriteEntry
            {
                texture_uuid: ResourceUuid::generate(),
                path,
                sprite_uuid: ResourceUuid::generate(),
            }),
            AssetType::Font => AssetEntry::Font(FontEntry
            {
                uuid: ResourceUuid::generate(),
                path,
                sizes: default_font_sizes(),
                antialiasing: true,
            }),
        }
    }
}
impl Display for AssetType
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalEntry
{
    #[serde(rename = "UUID")]
    pub uuid: ResourceUuid,
    #[serde(rename = "Path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteEntry
{
    #[serde(rename = "TextureUUID")]
    pub texture_uuid: ResourceUuid,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "SpriteUUID")]
    pub sprite_uuid: ResourceUuid,
}

fn default_font_sizes() -> Vec<u32> { DEFAULT_FONT_SIZES.to_vec() }
fn default_antialiasing() -> bool { true }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontEntry
{
    #[serde(rename = "UUID")]
    pub uuid: ResourceUuid,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Sizes", default = "default_font_sizes")]
    pub sizes: Vec<u32>,
    #[serde(rename = "Antialiasing", default = "default_antialiasing")]
    pub antialiasing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AssetEntry
{
    Normal(NormalEntry),
    Sprite(SpriteEntry),
    Font(FontEntry),
}
impl AssetEntry
{
    pub fn asset_type(&self) -> AssetType
    {
        match self
        {
            AssetEntry::Normal(_) => AssetType::Normal,
            AssetEntry::Sprite(_) => AssetType::Sprite,
            AssetEntry::Font(_) => AssetType::Font,
        }
    }

    // Source file, relative to the input folder of the list
    pub fn path(&self) -> &str
    {
        match self
        {
            AssetEntry::Normal(e) => &e.path,
            AssetEntry::Sprite(e) => &e.path,
            AssetEntry::Font(e) => &e.path,
        }
    }

    // Every resource ID this entry produces
    pub fn uuids(&self) -> Vec<&ResourceUuid>
    {
        match self
        {
            AssetEntry::Normal(e) => vec![&e.uuid],
            AssetEntry::Sprite(e) => vec![&e.texture_uuid, &e.sprite_uuid],
            AssetEntry::Font(e) => vec![&e.uuid],
        }
    }
}

#[derive(Debug)]
pub enum EntryParseError
{
    Json(serde_json::Error),
    EmptyUuid { index: usize },
    DuplicateUuid
    {
        uuid: ResourceUuid,
        first_index: usize,
        second_index: usize,
    },
    InvalidPath
    {
        index: usize,
        path: String,
    },
}
impl Display for EntryParseError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for EntryParseError { }

// Paths must stay inside the input folder they are resolved against
fn is_valid_entry_path(path: &str) -> bool
{
    let normalized = normalize_rel_path(path);
    if normalized.is_empty() { return false; }
    if path.starts_with('/') || path.starts_with('\\') { return false; }

    let bytes = normalized.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() { return false; } // drive letter

    !normalized.split('/').any(|part| part == "..")
}

// An ordered list of entries that all share one asset type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList
{
    asset_type: AssetType,
    entries: Vec<AssetEntry>,
}
impl EntryList
{
    pub fn new(asset_type: AssetType) -> Self
    {
        Self { asset_type, entries: Vec::new() }
    }

    // Parse a JSON array of entries using the schema of the asset type
    pub fn from_json(json: &str, asset_type: AssetType) -> Result<Self, EntryParseError>
    {
        let entries: Vec<AssetEntry> = match asset_type
        {
            AssetType::Normal => serde_json::from_str::<Vec<NormalEntry>>(json)
                .map_err(EntryParseError::Json)?
                .into_iter().map(AssetEntry::Normal).collect(),
            AssetType::Sprite => serde_json::from_str::<Vec<SpriteEntry>>(json)
                .map_err(EntryParseError::Json)?
                .into_iter().map(AssetEntry::Sprite).collect(),
            AssetType::Font => serde_json::from_str::<Vec<FontEntry>>(json)
                .map_err(EntryParseError::Json)?
                .into_iter().map(AssetEntry::Font).collect(),
        };

        Self::validate(&entries)?;
        Ok(Self { asset_type, entries })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error>
    {
        serde_json::to_string_pretty(&self.entries)
    }

    fn validate(entries: &[AssetEntry]) -> Result<(), EntryParseError>
    {
        let mut seen: HashMap<&ResourceUuid, usize> = HashMap::new();
        for (index, entry) in entries.iter().enumerate()
        {
            if !is_valid_entry_path(entry.path())
            {
                return Err(EntryParseError::InvalidPath { index, path: entry.path().to_string() });
            }

            for uuid in entry.uuids()
            {
                if uuid.is_empty()
                {
                    return Err(EntryParseError::EmptyUuid { index });
                }
                if let Some(first_index) = seen.insert(uuid, index)
                {
                    return Err(EntryParseError::DuplicateUuid
                    {
                        uuid: uuid.clone(),
                        first_index,
                        second_index: index,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn asset_type(&self) -> AssetType { self.asset_type }
    pub fn entries(&self) -> &[AssetEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn contains_path(&self, path: &str) -> bool
    {
        let normalized = normalize_rel_path(path);
        self.entries.iter().any(|e| normalize_rel_path(e.path()) == normalized)
    }

    // Append a new entry for a source file. Existing entries are never touched
    pub fn push_new(&mut self, path: impl Into<String>) -> &AssetEntry
    {
        let entry = self.asset_type.new_entry(path);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn parse_normal()
    {
        let list = EntryList::from_json(r#"[{"UUID": "a1", "Path": "tex1.png"}, {"UUID": "a2", "Path": "icons/tex2.png"}]"#, AssetType::Normal).unwrap();
        assert_eq!(2, list.len());
        assert_eq!("icons/tex2.png", list.entries()[1].path());
        assert_eq!(AssetType::Normal, list.entries()[0].asset_type());
    }

    #[test]
    fn parse_sprite()
    {
        let list = EntryList::from_json(r#"[{"TextureUUID": "t1", "Path": "x.png", "SpriteUUID": "s1"}]"#, AssetType::Sprite).unwrap();
        let AssetEntry::Sprite(sprite) = &list.entries()[0] else { panic!("not a sprite"); };
        assert_eq!(ResourceUuid::from("t1"), sprite.texture_uuid);
        assert_eq!(ResourceUuid::from("s1"), sprite.sprite_uuid);
    }

    #[test]
    fn parse_font_defaults()
    {
        let list = EntryList::from_json(r#"[{"UUID": "f1", "Path": "Roboto.ttf"}]"#, AssetType::Font).unwrap();
        let AssetEntry::Font(font) = &list.entries()[0] else { panic!("not a font"); };
        assert_eq!(DEFAULT_FONT_SIZES, font.sizes.as_slice());
        assert!(font.antialiasing);
    }

    #[test]
    fn wrong_schema_rejected()
    {
        let json = r#"[{"TextureUUID": "t1", "Path": "x.png", "SpriteUUID": "s1"}]"#;
        assert!(matches!(EntryList::from_json(json, AssetType::Normal), Err(EntryParseError::Json(_))));
    }

    #[test]
    fn duplicate_uuid_rejected()
    {
        let json = r#"[{"TextureUUID": "t1", "Path": "a.png", "SpriteUUID": "s1"}, {"TextureUUID": "s1", "Path": "b.png", "SpriteUUID": "s2"}]"#;
        let Err(EntryParseError::DuplicateUuid { first_index, second_index, .. }) = EntryList::from_json(json, AssetType::Sprite)
            else { panic!("expected duplicate"); };
        assert_eq!((0, 1), (first_index, second_index));
    }

    #[test]
    fn escaping_paths_rejected()
    {
        for bad in ["../up.png", "/abs.png", "C:/abs.png", "", "a/../../b.png"]
        {
            let json = format!(r#"[{{"UUID": "a1", "Path": "{bad}"}}]"#);
            assert!(matches!(EntryList::from_json(&json, AssetType::Normal), Err(EntryParseError::InvalidPath { .. })), "{bad}");
        }
    }

    #[test]
    fn json_roundtrip_keeps_key_names()
    {
        let mut list = EntryList::new(AssetType::Sprite);
        list.push_new("new.png");
        let json = list.to_json().unwrap();
        assert!(json.contains("\"TextureUUID\""));
        assert!(json.contains("\"SpriteUUID\""));
        assert!(json.contains("\"Path\": \"new.png\""));
        assert_eq!(list, EntryList::from_json(&json, AssetType::Sprite).unwrap());
    }

    #[test]
    fn contains_normalized_path()
    {
        let list = EntryList::from_json(r#"[{"UUID": "a1", "Path": "./icons\\tex1.png"}]"#, AssetType::Normal).unwrap();
        assert!(list.contains_path("icons/tex1.png"));
        assert!(!list.contains_path("tex1.png"));
    }
}
