use crate::color::Color;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::Path;

/// Right shifts applied to every pixel's RGB channels so that similar colors group together.
const DEGRADE_SHIFTS: [u32; 4] = [0, 2, 4, 6];

/// A rectangle within an image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    fn fits(&self, image: &RgbaImage) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(right), Some(bottom)) if right <= image.width() && bottom <= image.height())
    }
}

struct Sample {
    weight: f32,
    count: u32,
}

/// The most dominant color of an image, as an opaque color.
///
/// Bright opaque colors are favored, near black and mostly transparent pixels are ignored.
/// Returns `None` when every pixel was ignored.
pub fn dominant_color(image: &RgbaImage) -> Option<Color> {
    dominant_color_in(image, Region::new(0, 0, image.width(), image.height()))
}

/// Like [`dominant_color`], looking only at `region`. A region that doesn't fit yields `None`.
pub fn dominant_color_in(image: &RgbaImage, region: Region) -> Option<Color> {
    if !region.fits(image) {
        tracing::debug!("region {region:?} is outside a {}x{} image", image.width(), image.height());
        return None;
    }

    let mut samples: HashMap<u32, Sample> = HashMap::new();
    for y in region.y..region.y + region.height {
        for x in region.x..region.x + region.width {
            let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
            for shift in DEGRADE_SHIFTS {
                let color = u32::from_be_bytes([a, r >> shift, g >> shift, b >> shift]);
                if let Some(sample) = samples.get_mut(&color) {
                    sample.count += 1;
                    continue;
                }
                let weight = weight(color);
                if weight > 0.0 {
                    samples.insert(color, Sample { weight, count: 1 });
                }
            }
        }
    }

    samples
        .into_iter()
        .map(|(color, sample)| (sample.weight * sample.count as f32, color))
        .max_by(|(a_score, a_color), (b_score, b_color)| a_score.total_cmp(b_score).then(a_color.cmp(b_color)))
        .map(|(_, color)| Color::from_rgb(color))
}

/// Load an image from disk and find its dominant color. Unreadable files yield `None`.
pub fn dominant_color_from_path(path: &Path, region: Option<Region>) -> Option<Color> {
    let image = match image::open(path) {
        Ok(image) => image.to_rgba8(),
        Err(e) => {
            tracing::debug!("failed to load image {}: {e}", path.display());
            return None;
        }
    };
    match region {
        Some(region) => dominant_color_in(&image, region),
        None => dominant_color(&image),
    }
}

/// How much a single occurrence of `argb` counts. Zero means it is ignored.
fn weight(argb: u32) -> f32 {
    let [a, r, g, b] = argb.to_be_bytes().map(|channel| f32::from(channel) / 255.0);
    if (r <= 0.06 && g <= 0.06 && b <= 0.06) || a < 0.3 {
        return 0.0;
    }

    let emphasis = |channel: f32| 1.0 - (1.0 - channel) * (1.0 - channel);
    (emphasis(a) + 2.0 * emphasis(r) + 2.0 * emphasis(g) + 2.0 * emphasis(b)) / 7.0
}
