use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

pub fn load_texture<'a>(
    creator: &'a TextureCreator<WindowContext>,
    filename: &str,
) -> Result<Texture<'a>, String> {
    creator
        .load_texture(filename)
        .map_err(|e| format!("loading image {} error: {}", filename, e))
}

/// Loads a set of images in order. The returned vector is indexed the same
/// way as `filenames`, so callers can refer to textures by slot.
pub fn load_textures<'a>(
    creator: &'a TextureCreator<WindowContext>,
    filenames: &[&str],
) -> Result<Vec<Texture<'a>>, String> {
    let mut textures = Vec::with_capacity(filenames.len());
    for filename in filenames {
        textures.push(load_texture(creator, filename)?);
    }
    Ok(textures)
}
