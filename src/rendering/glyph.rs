//! Anti-aliased circle rasterization with straight-alpha source-over blending.

use image::{Rgba, RgbaImage};

/// Blend `src` over `dst`, with `coverage` scaling the source alpha
pub fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let src_a = src[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    if src_a >= 1.0 {
        *dst = Rgba([src[0], src[1], src[2], 255]);
        return;
    }

    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    let mix = |s: u8, d: u8| {
        let value = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    *dst = Rgba([
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]);
}

/// Visit every pixel within `reach` of the center and blend `color`
/// with the coverage returned by `coverage(distance)`
fn paint<F>(img: &mut RgbaImage, cx: f32, cy: f32, reach: f32, color: Rgba<u8>, coverage: F)
where
    F: Fn(f32) -> f32,
{
    let (w, h) = (img.width() as i64, img.height() as i64);
    let min_x = ((cx - reach).floor() as i64).max(0);
    let max_x = ((cx + reach).ceil() as i64).min(w - 1);
    let min_y = ((cy - reach).floor() as i64).max(0);
    let max_y = ((cy + reach).ceil() as i64).min(h - 1);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            let c = coverage((dx * dx + dy * dy).sqrt());
            if c > 0.0 {
                blend(img.get_pixel_mut(px as u32, py as u32), color, c);
            }
        }
    }
}

/// Fill a disc
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    paint(img, cx, cy, radius + 1.0, color, |d| (radius + 0.5 - d).clamp(0.0, 1.0));
}

/// Stroke a circle outline of `line_width` centered on `radius`
pub fn stroke_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, line_width: f32, color: Rgba<u8>) {
    let half = line_width / 2.0;
    paint(img, cx, cy, radius + half + 1.0, color, |d| {
        (half + 0.5 - (d - radius).abs()).clamp(0.0, 1.0)
    });
}
