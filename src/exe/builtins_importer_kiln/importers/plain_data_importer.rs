use crate::core::{ImportedResource, ImporterMeta, ImporterResult, ResourceImporter, SourceInput, VersionBuilder};
use asset_kiln::{PlainDataResource, Resource};

// Stores the source bytes verbatim
pub struct PlainDataImporter;
impl ImporterMeta for PlainDataImporter
{
    fn supported_input_file_extensions() -> &'static [&'static str]
    {
        &["txt", "json", "csv", "bin"]
    }

    fn importer_version(vb: &mut VersionBuilder)
    {
        vb.append(&[
            b"Initial",
        ]);
    }
}
impl ResourceImporter for PlainDataImporter
{
    fn import(&self, input: &mut SourceInput) -> ImporterResult<ImportedResource>
    {
        let bytes = input.read_all()?;
        Ok(ImportedResource::new(Resource::PlainData(PlainDataResource { bytes })))
    }
}
