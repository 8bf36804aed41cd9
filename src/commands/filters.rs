use anyhow::{ensure, Context, Result};
use colored::Colorize;

use crate::core::types::{Extent, Image, ImageOp, PixelFormat, Rect, Rgba};
use crate::filters::{build_pipeline, FilterSpec};

/// Configuration for the `filters` subcommand.
#[derive(Debug, Clone)]
pub struct FiltersConfig {
    pub width: u32,
    pub height: u32,
    pub blur_radius: f64,
    pub overlay: String,
    pub format: String,
    pub json: bool,
}

pub fn run_filters(config: FiltersConfig) -> Result<()> {
    let format: PixelFormat = config.format.parse()?;
    let color = parse_color(&config.overlay)?;

    let specs = vec![
        FilterSpec::Blur {
            radius: config.blur_radius,
        },
        FilterSpec::ColorOverlay { color },
    ];
    let styled = build_pipeline(&specs).context("building filter pipeline")?;
    log::debug!("applying {}", styled.name());

    let source = Image::with_extent(Rect::sized(config.width, config.height)).with_format(format);
    let result = styled.apply(source);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} {}", "pipeline:".bold(), styled.name());
        println!("  extent: {}", describe_extent(&result));
        println!("  format: {}", result.format());
        println!(
            "  ops applied: {}",
            result.ops().len().to_string().green()
        );
        for op in result.ops() {
            println!("    - {}", describe_op(op));
        }
    }
    Ok(())
}

fn describe_extent(image: &Image) -> String {
    match image.extent() {
        Extent::Finite(rect) => format!(
            "{}x{} at ({}, {})",
            rect.width, rect.height, rect.x, rect.y
        ),
        Extent::Infinite => "infinite".to_string(),
    }
}

fn describe_op(op: &ImageOp) -> String {
    match op {
        ImageOp::Blur { radius } => format!("blur, radius {radius}"),
        ImageOp::Fill { color } => format!(
            "fill ({}, {}, {}, {})",
            color.red, color.green, color.blue, color.alpha
        ),
        ImageOp::Composite { overlay, .. } => format!(
            "composite source-over, overlay with {} op(s), cropped to input",
            overlay.ops().len()
        ),
    }
}

/// Parse `r,g,b,a` into a color. Range validation belongs to the filter
/// builders; this only checks shape.
fn parse_color(input: &str) -> Result<Rgba> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    ensure!(
        parts.len() == 4,
        "expected an overlay color as r,g,b,a, got {input:?}"
    );
    let component = |raw: &str| -> Result<f32> {
        raw.parse::<f32>()
            .with_context(|| format!("bad color component {raw:?}"))
    };
    Ok(Rgba::new(
        component(parts[0])?,
        component(parts[1])?,
        component(parts[2])?,
        component(parts[3])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_accepts_four_components() {
        let color = parse_color("1, 0, 0, 0.2").unwrap();
        assert_eq!(color, Rgba::RED.with_alpha(0.2));
    }

    #[test]
    fn parse_color_rejects_wrong_arity() {
        assert!(parse_color("1,0,0").is_err());
        assert!(parse_color("1,0,0,0,0").is_err());
    }

    #[test]
    fn parse_color_rejects_non_numeric_components() {
        assert!(parse_color("1,0,zero,1").is_err());
    }

    #[test]
    fn run_filters_reports_invalid_configuration_as_an_error() {
        let config = FiltersConfig {
            width: 640,
            height: 480,
            blur_radius: -3.0,
            overlay: "1,0,0,0.2".to_string(),
            format: "rgba8".to_string(),
            json: false,
        };
        assert!(run_filters(config).is_err());
    }
}
