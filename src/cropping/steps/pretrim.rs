use crate::error::CropError;
use image::{DynamicImage, GenericImageView};

/// Image orientation; square images count as portrait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Rows removed from the bottom of the image before any analysis, per orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub landscape: u32,
    pub portrait: u32,
}

impl Margins {
    /// Margins tuned for the capture rig's bottom watermark band
    pub const RIG: Margins = Margins {
        landscape: 1661,
        portrait: 1580,
    };

    pub fn for_orientation(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Landscape => self.landscape,
            Orientation::Portrait => self.portrait,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.landscape == 0 && self.portrait == 0
    }
}

/// Remove a fixed band from the bottom of the image
pub fn apply(image: DynamicImage, margins: Margins) -> Result<DynamicImage, CropError> {
    let (width, height) = image.dimensions();
    let margin = margins.for_orientation(Orientation::of(width, height));

    if margin == 0 {
        return Ok(image);
    }
    if margin >= height {
        return Err(CropError::Processing(format!(
            "bottom margin of {} px leaves nothing of a {}x{} image",
            margin, width, height
        )));
    }

    Ok(image.crop_imm(0, 0, width, height - margin))
}
