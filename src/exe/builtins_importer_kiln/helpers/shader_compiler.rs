use asset_kiln::{ShaderBackend, ShaderBackendOutput, ShaderResource};
use naga::back::{spv, wgsl};
use naga::valid::{Capabilities, ValidationFlags, Validator};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub const SHADER_BACKENDS: &[ShaderBackend] = &[ShaderBackend::SpirV, ShaderBackend::Wgsl];

#[derive(Debug)]
pub enum IncludeError
{
    IOError
    {
        path: PathBuf,
        error: io::Error,
    },
    Malformed
    {
        path: PathBuf,
        line: usize,
    },
}
impl Display for IncludeError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for IncludeError { }

pub struct PreprocessedSource
{
    pub text: String,
    // every file spliced in, in the order first seen
    pub includes: Vec<PathBuf>,
}

// WGSL has no includes of its own. `#include "file"` lines are spliced in (once per file),
// resolved relative to the including file
pub fn preprocess(source: &str, source_path: &Path) -> Result<PreprocessedSource, IncludeError>
{
    let mut out = PreprocessedSource { text: String::with_capacity(source.len()), includes: Vec::new() };
    let mut seen = HashSet::new();
    seen.insert(source_path.to_path_buf());
    splice(source, source_path, &mut out, &mut seen)?;
    Ok(out)
}

fn splice(source: &str, source_path: &Path, out: &mut PreprocessedSource, seen: &mut HashSet<PathBuf>) -> Result<(), IncludeError>
{
    let source_dir = source_path.parent().unwrap_or(Path::new(""));
    for (line_index, line) in source.lines().enumerate()
    {
        let Some(directive) = line.trim_start().strip_prefix("#include") else
        {
            out.text.push_str(line);
            out.text.push('\n');
            continue;
        };

        let Some(include_name) = directive.trim().strip_prefix('"').and_then(|d| d.strip_suffix('"')) else
        {
            return Err(IncludeError::Malformed { path: source_path.to_path_buf(), line: line_index + 1 });
        };

        let include_path = source_dir.join(include_name);
        if !seen.insert(include_path.clone()) { continue; }

        let include_text = std::fs::read_to_string(&include_path)
            .map_err(|error| IncludeError::IOError { path: include_path.clone(), error })?;
        out.includes.push(include_path.clone());
        splice(&include_text, &include_path, out, seen)?;
    }
    Ok(())
}

// Parse, validate and emit a WGSL shader for every backend. Never fails, problems are recorded in the result
pub fn compile_wgsl(name: &str, source: &str) -> ShaderResource
{
    let mut shader = ShaderResource
    {
        name: name.to_string(),
        entry_points: Vec::new(),
        parse_diagnostic: None,
        backends: Vec::new(),
    };

    let module = match naga::front::wgsl::parse_str(source)
    {
        Ok(module) => module,
        Err(err) =>
        {
            shader.parse_diagnostic = Some(err.emit_to_string(source));
            return shader;
        }
    };
    shader.entry_points = module.entry_points.iter().map(|ep| ep.name.clone()).collect();

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    let info = match validator.validate(&module)
    {
        Ok(info) => info,
        Err(err) =>
        {
            shader.parse_diagnostic = Some(format!("Validation failed: {err:?}"));
            return shader;
        }
    };

    for backend in SHADER_BACKENDS
    {
        let output = match backend
        {
            ShaderBackend::SpirV => spv::write_vec(&module, &info, &spv::Options::default(), None)
                .map(|words| words.iter().flat_map(|w| w.to_le_bytes()).collect::<Vec<u8>>())
                .map_err(|e| format!("{e:?}")),
            ShaderBackend::Wgsl => wgsl::write_string(&module, &info, wgsl::WriterFlags::empty())
                .map(String::into_bytes)
                .map_err(|e| format!("{e:?}")),
        };

        shader.backends.push(match output
        {
            Ok(code) => ShaderBackendOutput { backend: *backend, compiled: true, diagnostic: None, code },
            Err(diagnostic) => ShaderBackendOutput { backend: *backend, compiled: false, diagnostic: Some(diagnostic), code: Vec::new() },
        });
    }

    shader
}

#[cfg(test)]
pub(crate) const TEST_SHADER: &str = r#"
@vertex
fn vs_main(@location(0) pos: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(pos, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.0, 0.0, 1.0);
}
"#;
