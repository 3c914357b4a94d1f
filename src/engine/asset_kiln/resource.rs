use crate::ResourceUuid;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::Path;

pub const RESOURCE_FILE_EXTENSION: &str = "asset";

#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub struct PlainDataResource
{
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub enum TextureFormat
{
    R8,
    Rgba8,
}
impl TextureFormat
{
    pub fn bytes_per_texel(self) -> usize
    {
        match self
        {
            TextureFormat::R8 => 1,
            TextureFormat::Rgba8 => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub struct TextureResource
{
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub texels: Vec<u8>,
}

// A (sub-)rectangle of a texture, in normalized texture coordinates
#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub struct SpriteResource
{
    pub texture: ResourceUuid,
    pub uv_offset: [f32; 2],
    pub uv_scale: [f32; 2],
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub struct FontVariant
{
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub struct FontResource
{
    pub name: String,
    pub antialiasing: bool, // applies to every variant
    pub variants: Vec<FontVariant>,
    pub font_data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bitcode::Encode, bitcode::Decode)]
pub enum ShaderBackend
{
    SpirV,
    Wgsl,
}

#[derive(Debug, Clone, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub struct ShaderBackendOutput
{
    pub backend: ShaderBackend,
    pub compiled: bool,
    pub diagnostic: Option<String>,
    pub code: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub struct ShaderResource
{
    pub name: String,
    pub entry_points: Vec<String>,
    // Front-end (parse/validate) failure, backends are empty when set
    pub parse_diagnostic: Option<String>,
    pub backends: Vec<ShaderBackendOutput>,
}

#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub enum Resource
{
    PlainData(PlainDataResource),
    Texture(TextureResource),
    Sprite(SpriteResource),
    Font(FontResource),
    Shader(ShaderResource),
}
impl Resource
{
    pub fn kind_name(&self) -> &'static str
    {
        match self
        {
            Resource::PlainData(_) => "plain data",
            Resource::Texture(_) => "texture",
            Resource::Sprite(_) => "sprite",
            Resource::Font(_) => "font",
            Resource::Shader(_) => "shader",
        }
    }
}

#[derive(Debug)]
pub enum ResourceFileError
{
    IOError(io::Error),
    BadMagic,
    UnsupportedVersion(u32),
    DecodeError(bitcode::Error),
}
impl Display for ResourceFileError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for ResourceFileError { }

// What gets written to disk for every imported resource
#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub struct ResourceFile
{
    pub version: u32,
    pub uuid: ResourceUuid,
    pub resource: Resource,
}
impl ResourceFile
{
    pub const MAGIC: &'static [u8; 4] = b"KLNR";
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(uuid: ResourceUuid, resource: Resource) -> Self
    {
        Self { version: Self::CURRENT_VERSION, uuid, resource }
    }

    pub fn encode(&self) -> Vec<u8>
    {
        let body = bitcode::encode(self);
        let mut bytes = Vec::with_capacity(Self::MAGIC.len() + body.len());
        bytes.extend_from_slice(Self::MAGIC);
        bytes.extend_from_slice(&body);
        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ResourceFileError>
    {
        let Some(body) = bytes.strip_prefix(Self::MAGIC.as_slice()) else
        {
            return Err(ResourceFileError::BadMagic);
        };
        let file: Self = bitcode::decode(body).map_err(ResourceFileError::DecodeError)?;
        if file.version != Self::CURRENT_VERSION
        {
            return Err(ResourceFileError::UnsupportedVersion(file.version));
        }
        Ok(file)
    }

    // Writes all or nothing, the previous file is kept if writing fails
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ResourceFileError>
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
        {
            std::fs::create_dir_all(parent).map_err(ResourceFileError::IOError)?;
        }

        let temp_path = path.with_extension(format!("{RESOURCE_FILE_EXTENSION}.tmp"));
        std::fs::write(&temp_path, self.encode()).map_err(ResourceFileError::IOError)?;
        std::fs::rename(&temp_path, path).map_err(|err|
        {
            let _ = std::fs::remove_file(&temp_path);
            ResourceFileError::IOError(err)
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceFileError>
    {
        let bytes = std::fs::read(path).map_err(ResourceFileError::IOError)?;
        Self::decode(&bytes)
    }
}
