use super::*;
use crate::importers::FontImporter;
use asset_kiln::{Resource, ResourceFile, ResourceManifest, ResourceUuid, RESOURCE_FILE_EXTENSION};
use std::path::{Path, PathBuf};

// Writes the font resource without registering it
pub(super) fn build_font(
    input_file: &Path,
    output_name: &str,
    output_folder: &Path,
    font_sizes: &[u32],
    antialiasing: bool,
    uuid: &ResourceUuid) -> Result<PathBuf, ImportError>
{
    if !input_file.is_file()
    {
        return Err(ImportError::MissingSourceFile(input_file.to_path_buf()));
    }
    let font_data = std::fs::read(input_file)
        .map_err(|error| ImportError::ReadError { path: input_file.to_path_buf(), error })?;

    let name = Path::new(output_name).file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| output_name.to_string());
    let font = FontImporter.import_font(font_data, &name, font_sizes, antialiasing)
        .map_err(ImportError::FontFailed)?;

    let output_path = output_folder.join(format!("{output_name}.{RESOURCE_FILE_EXTENSION}"));
    ResourceFile::new(uuid.clone(), Resource::Font(font))
        .save(&output_path)
        .map_err(|error| ImportError::WriteError { path: output_path.clone(), error })?;

    log::debug!("Imported font {input_file:?} ({} sizes) to {output_path:?}", font_sizes.len());
    Ok(output_path)
}

// Import a font as a single resource with one variant per size, all sharing the antialiasing setting.
// Registers the output under `uuid` on success
pub fn import_font(
    input_file: impl AsRef<Path>,
    output_name: &str,
    output_folder: impl AsRef<Path>,
    font_sizes: &[u32],
    antialiasing: bool,
    uuid: &ResourceUuid,
    manifest: &mut dyn ResourceManifest) -> Result<PathBuf, ImportError>
{
    let output_path = build_font(input_file.as_ref(), output_name, output_folder.as_ref(), font_sizes, antialiasing, uuid)?;
    manifest.register(uuid, &output_path);
    Ok(output_path)
}
