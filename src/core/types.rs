//! Domain value types for symbolic images.
//!
//! An [`Image`] here is a description, not a buffer: where it lives
//! (extent), how its pixels are tagged (format), and what has been done to
//! it (the op trace). Equality over the description is what makes pipeline
//! laws observable in tests. How an image value is obtained in the first
//! place (disk, network, embedded asset) is outside this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::FilterError;

/// Axis-aligned rectangle in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin.
    pub const fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// An image's extent: a finite rectangle, or the whole plane for generated
/// images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    Finite(Rect),
    Infinite,
}

impl Extent {
    pub fn is_finite(&self) -> bool {
        matches!(self, Extent::Finite(_))
    }
}

/// Normalized RGBA color. Each component is valid in `0.0..=1.0`; the
/// filter builders own range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// The same color with the alpha component replaced.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Whether every component lies in `0.0..=1.0`.
    pub fn is_normalized(&self) -> bool {
        [self.red, self.green, self.blue, self.alpha]
            .iter()
            .all(|component| (0.0..=1.0).contains(component))
    }
}

/// Closed set of pixel format tags an image can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    #[default]
    Rgba8,
    Rgba16F,
    Gray8,
}

impl PixelFormat {
    /// Stable external name, used in serialized output and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelFormat::Rgba8 => "rgba8",
            PixelFormat::Rgba16F => "rgba16f",
            PixelFormat::Gray8 => "gray8",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PixelFormat {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgba8" => Ok(PixelFormat::Rgba8),
            "rgba16f" => Ok(PixelFormat::Rgba16F),
            "gray8" => Ok(PixelFormat::Gray8),
            other => Err(FilterError::UnknownFormat(other.to_string())),
        }
    }
}

/// One applied operation in an image's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum ImageOp {
    Blur { radius: f64 },
    Fill { color: Rgba },
    Composite { overlay: Image, crop: Extent },
}

/// Opaque image value: extent, pixel format tag, and applied-op trace.
///
/// Images are immutable in spirit: every operation consumes the value and
/// returns a new one, so transforms over them are pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    extent: Extent,
    format: PixelFormat,
    ops: Vec<ImageOp>,
}

impl Image {
    /// A source image covering `rect`, with the default pixel format.
    pub fn with_extent(rect: Rect) -> Self {
        Self {
            extent: Extent::Finite(rect),
            format: PixelFormat::default(),
            ops: Vec::new(),
        }
    }

    /// An infinite constant-color image, as produced by a color generator.
    pub fn constant(color: Rgba) -> Self {
        Self {
            extent: Extent::Infinite,
            format: PixelFormat::default(),
            ops: vec![ImageOp::Fill { color }],
        }
    }

    /// The same image tagged with a different pixel format.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn ops(&self) -> &[ImageOp] {
        &self.ops
    }

    /// Record a blur pass. The extent is unchanged.
    pub fn blurred(mut self, radius: f64) -> Self {
        self.ops.push(ImageOp::Blur { radius });
        self
    }

    /// Composite `overlay` over this image, cropped to this image's extent.
    pub fn overlaid_with(mut self, overlay: Image) -> Self {
        let crop = self.extent;
        self.ops.push(ImageOp::Composite { overlay, crop });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_images_start_with_an_empty_trace() {
        let image = Image::with_extent(Rect::sized(640, 480));
        assert_eq!(image.extent(), Extent::Finite(Rect::sized(640, 480)));
        assert_eq!(image.format(), PixelFormat::Rgba8);
        assert!(image.ops().is_empty());
    }

    #[test]
    fn constant_images_cover_the_whole_plane() {
        let image = Image::constant(Rgba::RED);
        assert_eq!(image.extent(), Extent::Infinite);
        assert_eq!(
            image.ops(),
            &[ImageOp::Fill { color: Rgba::RED }]
        );
    }

    #[test]
    fn blurring_appends_to_the_trace_and_keeps_the_extent() {
        let image = Image::with_extent(Rect::sized(10, 10)).blurred(5.0);
        assert_eq!(image.extent(), Extent::Finite(Rect::sized(10, 10)));
        assert_eq!(image.ops(), &[ImageOp::Blur { radius: 5.0 }]);
    }

    #[test]
    fn compositing_crops_to_the_background_extent() {
        let background = Image::with_extent(Rect::sized(20, 20));
        let overlay = Image::constant(Rgba::RED);

        let composed = background.overlaid_with(overlay.clone());

        assert_eq!(composed.extent(), Extent::Finite(Rect::sized(20, 20)));
        assert_eq!(
            composed.ops(),
            &[ImageOp::Composite {
                overlay,
                crop: Extent::Finite(Rect::sized(20, 20)),
            }]
        );
    }

    #[test]
    fn pixel_format_names_round_trip() {
        for format in [PixelFormat::Rgba8, PixelFormat::Rgba16F, PixelFormat::Gray8] {
            assert_eq!(format.as_str().parse::<PixelFormat>(), Ok(format));
        }
    }

    #[test]
    fn unknown_pixel_format_is_a_typed_error() {
        let err = "bgr555".parse::<PixelFormat>().unwrap_err();
        assert_eq!(err, FilterError::UnknownFormat("bgr555".to_string()));
    }

    #[test]
    fn color_range_check() {
        assert!(Rgba::RED.is_normalized());
        assert!(Rgba::RED.with_alpha(0.2).is_normalized());
        assert!(!Rgba::new(1.5, 0.0, 0.0, 1.0).is_normalized());
        assert!(!Rgba::new(0.0, 0.0, 0.0, -0.1).is_normalized());
        assert!(!Rgba::new(f32::NAN, 0.0, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn image_serializes_with_tagged_ops() {
        let image = Image::with_extent(Rect::sized(4, 4)).blurred(1.5);
        let json = serde_json::to_string(&image).unwrap();
        assert!(json.contains("\"op\":\"blur\""));

        let back: Image = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }
}
