use crate::core::{ImportedResource, ImporterMeta, ImporterResult, ResourceImporter, SourceInput, VersionBuilder};
use crate::helpers::shader_compiler;
use asset_kiln::Resource;

// WGSL shaders, compiled for every supported backend. Compile failures are kept in the resource
// so they can be reported
pub struct ShaderImporter;
impl ImporterMeta for ShaderImporter
{
    fn supported_input_file_extensions() -> &'static [&'static str]
    {
        &["wgsl"]
    }

    fn importer_version(vb: &mut VersionBuilder)
    {
        vb.append(&[
            b"Initial",
            b"Includes",
        ]);
    }
}
impl ResourceImporter for ShaderImporter
{
    fn import(&self, input: &mut SourceInput) -> ImporterResult<ImportedResource>
    {
        let source_bytes = input.read_all()?;
        let source = String::from_utf8(source_bytes)?;

        let preprocessed = shader_compiler::preprocess(&source, input.source_path())?;
        let shader = shader_compiler::compile_wgsl(&input.stem(), &preprocessed.text);

        Ok(ImportedResource::with_dependencies(Resource::Shader(shader), preprocessed.includes))
    }
}
