use crate::core::{ImportedResource, ImporterMeta, ImporterResult, ResourceImporter, SourceInput, VersionBuilder};
use asset_kiln::{Resource, TextureFormat, TextureResource, TEXTURE_FILE_EXTENSIONS};
use image::DynamicImage;

pub struct TextureImporter;
impl TextureImporter
{
    pub fn texture_from_image(image: DynamicImage) -> TextureResource
    {
        match image
        {
            DynamicImage::ImageLuma8(luma) => TextureResource
            {
                width: luma.width(),
                height: luma.height(),
                format: TextureFormat::R8,
                texels: luma.into_raw(),
            },
            other =>
            {
                let rgba = other.into_rgba8();
                TextureResource
                {
                    width: rgba.width(),
                    height: rgba.height(),
                    format: TextureFormat::Rgba8,
                    texels: rgba.into_raw(),
                }
            }
        }
    }
}
impl ImporterMeta for TextureImporter
{
    fn supported_input_file_extensions() -> &'static [&'static str]
    {
        TEXTURE_FILE_EXTENSIONS
    }

    fn importer_version(vb: &mut VersionBuilder)
    {
        vb.append(&[
            b"Initial",
        ]);
    }
}
impl ResourceImporter for TextureImporter
{
    fn import(&self, input: &mut SourceInput) -> ImporterResult<ImportedResource>
    {
        let bytes = input.read_all()?;
        // mips? compression?
        let image = image::load_from_memory(&bytes)?;
        Ok(ImportedResource::new(Resource::Texture(Self::texture_from_image(image))))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use std::path::Path;

    #[test]
    fn rgba_png()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tex1.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255])).save(&path).unwrap();

        let mut input = SourceInput::open(&path, "tex1.png").unwrap();
        let imported = TextureImporter.import(&mut input).unwrap();
        let Resource::Texture(texture) = imported.resource else { panic!("not a texture"); };
        assert_eq!((3, 2), (texture.width, texture.height));
        assert_eq!(TextureFormat::Rgba8, texture.format);
        assert_eq!(3 * 2 * 4, texture.texels.len());
        assert_eq!(&[10, 20, 30, 255], &texture.texels[0..4]);
    }

    #[test]
    fn grayscale_stays_single_channel()
    {
        let texture = TextureImporter::texture_from_image(DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([7]))));
        assert_eq!(TextureFormat::R8, texture.format);
        assert_eq!(16, texture.texels.len());
    }

    #[test]
    fn garbage_fails()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let mut input = SourceInput::open(Path::new(&path), "bad.png").unwrap();
        assert!(TextureImporter.import(&mut input).is_err());
    }
}
