//! Output naming and encoding

use crate::error::CropError;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

/// Encoding of written images
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Same format (and extension) as the input file
    #[default]
    Keep,
    Jpeg,
    Png,
}

/// How an output file name is derived from its input file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    pub prefix: String,
    pub suffix: String,
    pub format: OutputFormat,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: "_cropped".to_string(),
            format: OutputFormat::Keep,
        }
    }
}

impl Naming {
    /// `<output_dir>/<prefix><stem><suffix>.<ext>`
    pub fn output_path(&self, input: &Path, output_dir: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let ext = match self.format {
            OutputFormat::Keep => input
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_else(|| "png".to_string()),
            OutputFormat::Jpeg => "jpg".to_string(),
            OutputFormat::Png => "png".to_string(),
        };

        output_dir.join(format!("{}{}{}.{}", self.prefix, stem, self.suffix, ext))
    }
}

/// Write `image` to `path`, encoding by the path's extension
///
/// The image is written to a temporary file next to `path` and renamed into
/// place once fully encoded.
pub fn save(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), CropError> {
    let save_error = |reason: String| CropError::Save {
        path: path.to_path_buf(),
        reason,
    };

    let format = ImageFormat::from_path(path).map_err(|e| save_error(e.to_string()))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::Builder::new()
        .prefix(".bbox-crop-")
        .tempfile_in(dir)
        .map_err(|e| save_error(e.to_string()))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        encode(image, format, quality, &mut writer).map_err(|e| save_error(e.to_string()))?;
        writer.flush().map_err(|e| save_error(e.to_string()))?;
    }

    temp.persist(path).map_err(|e| save_error(e.error.to_string()))?;

    tracing::debug!("Wrote {:?} as {:?}", path, format);
    Ok(())
}

fn encode<W: Write + Seek>(
    image: &DynamicImage,
    format: ImageFormat,
    quality: u8,
    writer: &mut W,
) -> Result<(), image::ImageError> {
    match format {
        ImageFormat::Jpeg => {
            // JPEG carries neither alpha nor 16-bit samples
            let flattened = if image.color().has_color() {
                DynamicImage::ImageRgb8(image.to_rgb8())
            } else {
                DynamicImage::ImageLuma8(image.to_luma8())
            };
            let encoder = JpegEncoder::new_with_quality(writer, quality);
            flattened.write_with_encoder(encoder)
        }
        other => image.write_to(writer, other),
    }
}
