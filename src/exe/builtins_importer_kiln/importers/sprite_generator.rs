use crate::core::{ImporterResult, VersionBuilder};
use asset_kiln::{ResourceUuid, SpriteResource, TextureResource};

pub trait SpriteGenerator: Send + Sync
{
    fn generate(&self, texture_uuid: &ResourceUuid, texture: &TextureResource) -> ImporterResult<SpriteResource>;

    fn generator_version(&self, vb: &mut VersionBuilder);
}

// One sprite covering the whole texture
pub struct FullTextureSpriteGenerator;
impl SpriteGenerator for FullTextureSpriteGenerator
{
    fn generate(&self, texture_uuid: &ResourceUuid, texture: &TextureResource) -> ImporterResult<SpriteResource>
    {
        if texture.width == 0 || texture.height == 0
        {
            return Err(format!("Cannot generate a sprite for empty texture {texture_uuid}").into());
        }

        Ok(SpriteResource
        {
            texture: texture_uuid.clone(),
            uv_offset: [0.0, 0.0],
            uv_scale: [1.0, 1.0],
            width: texture.width,
            height: texture.height,
        })
    }

    fn generator_version(&self, vb: &mut VersionBuilder)
    {
        vb.append(&[
            b"Initial",
        ]);
    }
}
