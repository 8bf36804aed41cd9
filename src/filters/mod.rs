//! Image filter builders.
//!
//! Each builder validates its configuration up front and returns a
//! [`Transform`] over [`Image`] values, or a typed [`FilterError`] when the
//! configuration cannot be honored. A filter that would produce a wrong
//! image refuses to exist instead; callers decide how to handle that.
//! Builders are deterministic: a given configuration always yields the same
//! transform.

use serde::{Deserialize, Serialize};

use crate::core::errors::FilterError;
use crate::core::types::{Image, Rgba};
use crate::transform::Transform;

/// Gaussian blur with the given radius, in pixels.
///
/// The radius must be finite and non-negative.
pub fn blur(radius: f64) -> Result<Transform<Image>, FilterError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(FilterError::invalid(
            "blur",
            format!("radius must be finite and non-negative, got {radius}"),
        ));
    }
    Ok(Transform::named("blur", move |image: Image| {
        image.blurred(radius)
    }))
}

/// Constant color generator.
///
/// Ignores its input and yields an infinite constant-color image.
pub fn color_generator(color: Rgba) -> Result<Transform<Image>, FilterError> {
    ensure_color("color_generator", color)?;
    Ok(Transform::named("color_generator", move |_image: Image| {
        Image::constant(color)
    }))
}

/// Composite `overlay` over the input, cropped to the input's extent.
pub fn composite_source_over(overlay: Image) -> Transform<Image> {
    Transform::named("composite_source_over", move |image: Image| {
        image.overlaid_with(overlay.clone())
    })
}

/// Tint the input: generate a constant color, then composite it over the
/// input, cropped to the input's extent.
pub fn color_overlay(color: Rgba) -> Result<Transform<Image>, FilterError> {
    let generate = color_generator(color)?;
    Ok(Transform::named("color_overlay", move |image: Image| {
        let overlay = generate.apply(image.clone());
        composite_source_over(overlay).apply(image)
    }))
}

fn ensure_color(filter: &'static str, color: Rgba) -> Result<(), FilterError> {
    if color.is_normalized() {
        Ok(())
    } else {
        Err(FilterError::invalid(
            filter,
            format!("color components must lie in 0.0..=1.0, got {color:?}"),
        ))
    }
}

/// A filter pipeline stage described as data.
///
/// This is the configuration surface for building pipelines from CLI flags
/// or JSON. Every recognized option is an explicit field; there is no
/// string-keyed parameter bag to misspell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "filter")]
pub enum FilterSpec {
    Blur { radius: f64 },
    ColorGenerator { color: Rgba },
    CompositeSourceOver { overlay: Image },
    ColorOverlay { color: Rgba },
}

impl FilterSpec {
    /// Build the transform this spec describes.
    pub fn build(&self) -> Result<Transform<Image>, FilterError> {
        match self {
            FilterSpec::Blur { radius } => blur(*radius),
            FilterSpec::ColorGenerator { color } => color_generator(*color),
            FilterSpec::CompositeSourceOver { overlay } => {
                Ok(composite_source_over(overlay.clone()))
            }
            FilterSpec::ColorOverlay { color } => color_overlay(*color),
        }
    }
}

/// Build one transform from a list of specs, applied in order.
///
/// Fails on the first invalid spec; later specs are not built.
pub fn build_pipeline(specs: &[FilterSpec]) -> Result<Transform<Image>, FilterError> {
    let mut built = Transform::identity();
    for spec in specs {
        let stage = spec.build()?;
        log::debug!("adding {} to pipeline", stage.name());
        built = built.then(&stage);
    }
    Ok(built)
}
