//! Bloom post-processing: a dilated and blurred copy of the glyph layer
//! that sits behind the sharp glyphs as a glow.

use image::{Rgba, RgbaImage, imageops};
use rayon::prelude::*;

/// Extra pixels added on each axis so the glow is not clipped
pub const BLOOM_PADDING: u32 = 10;
/// Radius of the dilation disc
pub const DILATE_RADIUS: u32 = 2;
/// Standard deviation of the gaussian blur
pub const BLUR_SIGMA: f32 = 4.0;

/// Brightness rank used to pick the dilated pixel, alpha breaking ties
fn rank(px: &Rgba<u8>) -> (u32, u8) {
    let [r, g, b, a] = px.0;
    (3 * r as u32 + 6 * g as u32 + b as u32, a)
}

/// Morphological dilation: every pixel is replaced by the brightest whole
/// pixel found over a disc of `radius` pixels. Channels are never mixed
/// across pixels. Rows are processed in parallel.
pub fn dilate(img: &RgbaImage, radius: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let r = radius as i64;
    let offsets: Vec<(i64, i64)> = (-r..=r)
        .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx * dx + dy * dy <= r * r)
        .collect();

    let mut out = RgbaImage::new(w, h);
    let stride = w as usize * 4;
    if stride == 0 {
        return out;
    }

    out.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        for x in 0..w as i64 {
            let mut best = Rgba([0u8; 4]);
            for &(dx, dy) in &offsets {
                let (sx, sy) = (x + dx, y as i64 + dy);
                if sx < 0 || sy < 0 || sx >= w as i64 || sy >= h as i64 {
                    continue;
                }
                let px = img.get_pixel(sx as u32, sy as u32);
                if rank(px) > rank(&best) {
                    best = *px;
                }
            }
            let i = x as usize * 4;
            row[i..i + 4].copy_from_slice(&best.0);
        }
    });

    out
}

/// Gaussian blur with the given standard deviation
pub fn gaussian_blur(img: &RgbaImage, sigma: f32) -> RgbaImage {
    imageops::blur(img, sigma)
}

/// Build the glow layer: the glyphs copied into a padded canvas at
/// (`BLOOM_PADDING`, `BLOOM_PADDING`), dilated, then blurred
pub fn bloom_layer(glyphs: &RgbaImage) -> RgbaImage {
    let (w, h) = glyphs.dimensions();
    let mut extended = RgbaImage::new(w + BLOOM_PADDING, h + BLOOM_PADDING);
    imageops::replace(&mut extended, glyphs, BLOOM_PADDING as i64, BLOOM_PADDING as i64);

    let dilated = dilate(&extended, DILATE_RADIUS);
    gaussian_blur(&dilated, BLUR_SIGMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dilate_grows_a_point_into_a_disc() {
        let mut img = RgbaImage::new(9, 9);
        img.put_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let out = dilate(&img, 2);

        assert_eq!(*out.get_pixel(4, 4), Rgba([200, 100, 50, 255]));
        assert_eq!(*out.get_pixel(6, 4), Rgba([200, 100, 50, 255]));
        assert_eq!(*out.get_pixel(5, 5), Rgba([200, 100, 50, 255]));
        // (6, 6) is at distance sqrt(8) > 2
        assert_eq!(out.get_pixel(6, 6)[3], 0);
        assert_eq!(out.get_pixel(7, 4)[3], 0);
    }

    #[test]
    fn test_dilate_picks_brightest_whole_pixel() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 100]));
        img.put_pixel(2, 0, Rgba([0, 0, 255, 200]));
        let out = dilate(&img, 2);
        // Red outranks blue; its channels are kept together, alpha included
        assert_eq!(*out.get_pixel(1, 0), Rgba([255, 0, 0, 100]));
        assert_eq!(*out.get_pixel(2, 0), Rgba([255, 0, 0, 100]));
    }

    #[test]
    fn test_dilate_prefers_opaque_over_transparent_black() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        let out = dilate(&img, 1);
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_bloom_of_empty_layer_is_empty() {
        let glyphs = RgbaImage::new(30, 20);
        let bloom = bloom_layer(&glyphs);
        assert_eq!(bloom.dimensions(), (40, 30));
        assert!(bloom.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_bloom_spreads_light() {
        let mut glyphs = RgbaImage::new(30, 30);
        glyphs.put_pixel(15, 15, Rgba([255, 255, 255, 255]));
        let bloom = bloom_layer(&glyphs);

        // The light lands at its padded position and leaks around it
        assert!(bloom.get_pixel(25, 25)[3] > 0);
        assert!(bloom.get_pixel(29, 25)[3] > 0);
        assert!(bloom.get_pixel(25, 25)[3] < 255);
        assert_eq!(bloom.get_pixel(0, 0)[3], 0);
    }
}
