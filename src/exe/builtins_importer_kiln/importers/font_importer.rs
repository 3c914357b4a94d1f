use crate::core::{ImporterMeta, VersionBuilder};
use asset_kiln::{FontResource, FontVariant, FONT_FILE_EXTENSIONS};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum FontImportError
{
    NoFontSizes,
    InvalidFontSize(u32),
    NotAFont(&'static str),
}
impl Display for FontImportError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for FontImportError { }

const SFNT_TRUETYPE: [u8; 4] = [0, 1, 0, 0];
const SFNT_OPENTYPE: [u8; 4] = *b"OTTO";
const SFNT_APPLE_TRUETYPE: [u8; 4] = *b"true";
const SFNT_COLLECTION: [u8; 4] = *b"ttcf";

// Checks the sfnt header, glyph data itself is left to the renderer
fn validate_font_data(data: &[u8]) -> Result<(), FontImportError>
{
    if data.len() < 12 { return Err(FontImportError::NotAFont("file too small")); }

    let tag = [data[0], data[1], data[2], data[3]];
    match tag
    {
        SFNT_COLLECTION =>
        {
            let num_fonts = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
            if num_fonts == 0 { return Err(FontImportError::NotAFont("empty font collection")); }
        }
        SFNT_TRUETYPE | SFNT_OPENTYPE | SFNT_APPLE_TRUETYPE =>
        {
            let num_tables = u16::from_be_bytes([data[4], data[5]]);
            if num_tables == 0 { return Err(FontImportError::NotAFont("no font tables")); }
        }
        _ => return Err(FontImportError::NotAFont("unknown sfnt version")),
    }
    Ok(())
}

pub struct FontImporter;
impl ImporterMeta for FontImporter
{
    fn supported_input_file_extensions() -> &'static [&'static str]
    {
        FONT_FILE_EXTENSIONS
    }

    fn importer_version(vb: &mut VersionBuilder)
    {
        vb.append(&[
            b"Initial",
        ]);
    }
}
impl FontImporter
{
    // One variant per requested size, all sharing the antialiasing setting
    pub fn import_font(&self, font_data: Vec<u8>, name: &str, font_sizes: &[u32], antialiasing: bool) -> Result<FontResource, FontImportError>
    {
        if font_sizes.is_empty() { return Err(FontImportError::NoFontSizes); }
        if let Some(bad) = font_sizes.iter().find(|s| **s == 0)
        {
            return Err(FontImportError::InvalidFontSize(*bad));
        }
        validate_font_data(&font_data)?;

        let mut variants: Vec<FontVariant> = Vec::with_capacity(font_sizes.len());
        for size in font_sizes
        {
            if variants.iter().any(|v| v.size == *size) { continue; }
            variants.push(FontVariant { size: *size });
        }

        Ok(FontResource
        {
            name: name.to_string(),
            antialiasing,
            variants,
            font_data,
        })
    }
}

#[cfg(test)]
pub(crate) fn fake_truetype() -> Vec<u8>
{
    let mut data = SFNT_TRUETYPE.to_vec();
    data.extend_from_slice(&[0, 1, 0, 16, 0, 0, 0, 0]); // one table
    data.extend_from_slice(&[0u8; 16]);
    data
}
