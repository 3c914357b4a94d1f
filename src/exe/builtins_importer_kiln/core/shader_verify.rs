use asset_kiln::ShaderResource;

// Report every problem with an imported shader. True if it parsed and compiled for all its backends
pub fn verify_and_report_shader(shader: &ShaderResource) -> bool
{
    if let Some(diagnostic) = &shader.parse_diagnostic
    {
        log::error!("Shader {} failed to parse:\n{diagnostic}", shader.name);
        return false;
    }

    if shader.backends.is_empty()
    {
        log::error!("Shader {} was not compiled for any backend", shader.name);
        return false;
    }

    let mut valid = true;
    for output in shader.backends.iter().filter(|b| !b.compiled)
    {
        log::error!("Shader {} failed to compile for {:?}:\n{}",
            shader.name,
            output.backend,
            output.diagnostic.as_deref().unwrap_or("<no diagnostic>"));
        valid = false;
    }
    valid
}
