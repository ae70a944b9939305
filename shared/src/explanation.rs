//! Explanation overlays. The service either sends a ready PNG as base64 or a
//! raw Grad-CAM intensity grid, which is colorized and encoded here.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Edge length of the rendered overlay, matching the classifier input.
pub const HEATMAP_SIZE: u32 = 224;

pub fn is_valid_base64(data: &str) -> bool {
    STANDARD.decode(data).is_ok()
}

/// `data:` URI for a base64 PNG.
pub fn data_uri(base64_png: &str) -> String {
    format!("data:image/png;base64,{base64_png}")
}

/// Renders a Grad-CAM grid to a base64 PNG. Returns `None` for grids that are
/// empty, ragged or carry no signal (the service sends zeros for healthy scans).
pub fn heatmap_to_base64_png(grid: &[Vec<f64>]) -> Option<String> {
    let height = grid.len();
    let width = grid.first().map(Vec::len).unwrap_or(0);
    if width == 0 || grid.iter().any(|row| row.len() != width) {
        log::warn!("Ignoring heatmap with irregular shape");
        return None;
    }

    let peak = grid
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return None;
    }
    // the service sends 0..255 bytes, unit floats are accepted too
    let scale = if peak > 1.0 { 255.0 } else { 1.0 };

    let mut small = RgbImage::new(width as u32, height as u32);
    for (y, row) in grid.iter().enumerate() {
        for (x, value) in row.iter().enumerate() {
            let intensity = if value.is_finite() { (value / scale).clamp(0.0, 1.0) } else { 0.0 };
            small.put_pixel(x as u32, y as u32, colorize(intensity));
        }
    }

    let overlay = imageops::resize(&small, HEATMAP_SIZE, HEATMAP_SIZE, FilterType::Triangle);
    let mut png = Vec::new();
    if let Err(e) = overlay.write_to(&mut Cursor::new(&mut png), ImageFormat::Png) {
        log::warn!("Failed to encode heatmap: {e}");
        return None;
    }

    Some(STANDARD.encode(png))
}

/// Blue through green to red, the usual Grad-CAM ramp.
fn colorize(intensity: f64) -> Rgb<u8> {
    let channel = |center: f64| {
        let v = 1.5 - (4.0 * intensity - center).abs();
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    };
    Rgb([channel(3.0), channel(2.0), channel(1.0)])
}
