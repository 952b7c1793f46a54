//! Texture assets: raster image decoding and registry construction
//!
//! PNG files become single-frame textures and GIF files one frame per GIF
//! frame. Every pixel is reduced to luminance and alpha: a pixel is set when
//! its luminance is exactly zero (black ink) and opaque when its alpha is
//! non-zero.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, GrayAlphaImage};
use thiserror::Error;

use tui_shooter_core::{GameError, Texture, TextureRegistry, TextureSpec};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("unsupported image format: {0} (expected .png or .gif)")]
    UnsupportedFormat(PathBuf),

    #[error("{path}: frame {frame} is {actual:?}, expected {expected:?}")]
    FrameSize {
        path: PathBuf,
        frame: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("{0} has no frames")]
    Empty(PathBuf),

    #[error(transparent)]
    Texture(#[from] GameError),
}

/// Load a single-frame texture from a PNG file
pub fn load_png(path: &Path) -> Result<Texture, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    preprocess(path, vec![image.to_luma_alpha8()])
}

/// Load every frame of a GIF file
pub fn load_gif(path: &Path) -> Result<Texture, AssetError> {
    let file = File::open(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_err = |source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let frames = GifDecoder::new(BufReader::new(file))
        .map_err(decode_err)?
        .into_frames()
        .collect_frames()
        .map_err(decode_err)?;
    let frames = frames
        .into_iter()
        .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()).to_luma_alpha8())
        .collect();
    preprocess(path, frames)
}

/// Load a texture, picking the decoder by file extension
pub fn load_texture(path: &Path) -> Result<Texture, AssetError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => load_png(path),
        Some("gif") => load_gif(path),
        _ => Err(AssetError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Convert luminance+alpha frames into a texture.
///
/// All frames must share the size of the first one.
pub fn preprocess(path: &Path, frames: Vec<GrayAlphaImage>) -> Result<Texture, AssetError> {
    let Some(first) = frames.first() else {
        return Err(AssetError::Empty(path.to_path_buf()));
    };
    let expected = first.dimensions();
    let (width, height) = (expected.0 as usize, expected.1 as usize);

    let mut data = Vec::with_capacity(width * height * frames.len());
    let mut mask = Vec::with_capacity(width * height * frames.len());
    for (index, frame) in frames.iter().enumerate() {
        if frame.dimensions() != expected {
            return Err(AssetError::FrameSize {
                path: path.to_path_buf(),
                frame: index,
                expected,
                actual: frame.dimensions(),
            });
        }
        for pixel in frame.pixels() {
            let [luminance, alpha] = pixel.0;
            data.push(u8::from(luminance == 0));
            mask.push(u8::from(alpha > 0));
        }
    }

    let texture = Texture::new(width, height, frames.len(), data, mask)?;
    tracing::debug!(path = %path.display(), %texture, "decoded texture");
    Ok(texture)
}

/// Build the texture registry for a configuration's `textures` table.
///
/// Image paths are resolved against `base_dir`.
pub fn build_registry(
    specs: &BTreeMap<String, TextureSpec>,
    base_dir: &Path,
) -> Result<TextureRegistry, AssetError> {
    let mut registry = TextureRegistry::new();
    for (name, spec) in specs {
        let texture = match spec {
            TextureSpec::Png { filename } => load_png(&base_dir.join(filename))?,
            TextureSpec::Gif { filename } => load_gif(&base_dir.join(filename))?,
            TextureSpec::Circle { size } => Texture::from_circle(*size),
            TextureSpec::Rectangle { width, height } => Texture::from_rectangle(*width, *height),
        };
        registry.insert(name.clone(), texture);
    }
    registry.dump();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::LumaA;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tui-shooter-{}-{name}", std::process::id()))
    }

    #[test]
    fn black_opaque_pixels_are_set() {
        let mut img = GrayAlphaImage::new(2, 1);
        img.put_pixel(0, 0, LumaA([0, 255]));
        img.put_pixel(1, 0, LumaA([200, 0]));
        let texture = preprocess(Path::new("mem"), vec![img]).unwrap();
        assert_eq!(texture.frame_data(0), &[1, 0]);
        assert_eq!(texture.frame_mask(0), &[1, 0]);
    }

    #[test]
    fn frames_must_share_a_size() {
        let frames = vec![GrayAlphaImage::new(2, 2), GrayAlphaImage::new(3, 2)];
        assert!(matches!(
            preprocess(Path::new("mem"), frames),
            Err(AssetError::FrameSize { frame: 1, .. })
        ));
        assert!(matches!(
            preprocess(Path::new("mem"), Vec::new()),
            Err(AssetError::Empty(_))
        ));
    }

    #[test]
    fn png_round_trip_through_the_loader() {
        let path = scratch_path("ship.png");
        let mut img = GrayAlphaImage::new(3, 2);
        img.put_pixel(1, 1, LumaA([0, 255]));
        img.save(&path).unwrap();

        let texture = load_texture(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!((texture.width(), texture.height(), texture.frames()), (3, 2, 1));
        assert_eq!(texture.frame_mask(0), &[0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        assert!(matches!(
            load_texture(Path::new("ship.bmp")),
            Err(AssetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn generated_specs_need_no_files() {
        let mut specs = BTreeMap::new();
        specs.insert("bullet".to_string(), TextureSpec::Circle { size: 4 });
        specs.insert(
            "wall".to_string(),
            TextureSpec::Rectangle { width: 2, height: 3 },
        );
        let registry = build_registry(&specs, Path::new("/nonexistent")).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("wall").unwrap().height(), 3);
    }
}
