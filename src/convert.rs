//! Decode, preview and icon encoding for a single validated source image.
//!
//! The preview and the icon each decode the source on their own, so a failure
//! in one never touches the result of the other.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use image::{
    DynamicImage, ExtendedColorType, ImageReader, ImageResult, RgbaImage,
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::FilterType,
};

use crate::{
    constants::{ICON_EXTENSION, ICON_SIZES, PREVIEW_SIZE},
    drop_handler::SourceImagePath,
    error::{ConvertError, EncodeCause},
};

/// Fixed-size RGBA copy of the source, ready to be handed to the display.
#[derive(Debug, Clone)]
pub struct PreviewBitmap(RgbaImage);

impl PreviewBitmap {
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn rgba(&self) -> &[u8] {
        self.0.as_raw()
    }
}

// Sniffs the content instead of trusting the extension.
fn read_image(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

pub fn decode(src: &SourceImagePath) -> Result<DynamicImage, ConvertError> {
    let path = src.as_path();
    let image = read_image(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Squashes the image to exactly `PREVIEW_SIZE` square, aspect ratio is not kept.
pub fn build_preview(image: &DynamicImage) -> PreviewBitmap {
    let resized = image.resize_exact(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3);
    PreviewBitmap(resized.into_rgba8())
}

/// `<dir>/<stem>.ico` next to the source.
pub fn icon_path_for(src: &Path) -> PathBuf {
    src.with_extension(ICON_EXTENSION)
}

/// Decodes the source again and writes every size of [`ICON_SIZES`] into one
/// `.ico` beside it, replacing any existing file.
pub fn write_icon(src: &SourceImagePath) -> Result<PathBuf, ConvertError> {
    let out = icon_path_for(src.as_path());
    let encode_err = |source: EncodeCause| ConvertError::Encode {
        path: out.clone(),
        source,
    };

    let image = read_image(src.as_path()).map_err(|e| encode_err(e.into()))?;
    let bytes = encode_icon(&image).map_err(|e| encode_err(e.into()))?;
    persist(&out, &bytes).map_err(|e| encode_err(e.into()))?;

    log::info!("wrote {} ({} bytes)", out.display(), bytes.len());
    Ok(out)
}

fn encode_icon(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let frames = ICON_SIZES
        .iter()
        .map(|&size| {
            let entry = image
                .resize_exact(size, size, FilterType::Lanczos3)
                .into_rgba8();
            IcoFrame::as_png(entry.as_raw(), size, size, ExtendedColorType::Rgba8)
        })
        .collect::<ImageResult<Vec<_>>>()?;

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf).encode_images(&frames)?;
    Ok(buf)
}

// Write to a sibling temp file and rename over the target, so the target is
// either the old file or the complete new one.
fn persist(out: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = out.with_extension("ico.tmp");
    let result = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, out));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
