// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Whole-frame smoothing filters
//!
//! Both filters run uniformly over the image with no region detection.
//! Edge pixels are handled by replicating the nearest border pixel.

use image::{Rgb, RgbImage};

/// 5x5 "smooth more" kernel, row major
const SMOOTH_MORE_KERNEL: [u32; 25] = [
    1, 1, 1, 1, 1, //
    1, 5, 5, 5, 1, //
    1, 5, 44, 5, 1, //
    1, 5, 5, 5, 1, //
    1, 1, 1, 1, 1, //
];

/// Sum of `SMOOTH_MORE_KERNEL`
const SMOOTH_MORE_SCALE: u32 = 100;

const SMOOTH_MORE_RADIUS: i64 = 2;

/// Median window radius (3x3 window)
pub const MEDIAN_RADIUS: u32 = 1;

/// Strong neighbourhood averaging over a 5x5 window.
///
/// Out-of-range taps read the nearest edge pixel, so the border is filtered
/// like the interior.
pub fn smooth_more(img: &RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    let mut output = RgbImage::new(w, h);
    if w == 0 || h == 0 {
        return output;
    }

    let max_x = i64::from(w) - 1;
    let max_y = i64::from(h) - 1;

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0u32; 3];

            for ky in -SMOOTH_MORE_RADIUS..=SMOOTH_MORE_RADIUS {
                let ny = (i64::from(y) + ky).clamp(0, max_y) as u32;
                for kx in -SMOOTH_MORE_RADIUS..=SMOOTH_MORE_RADIUS {
                    let nx = (i64::from(x) + kx).clamp(0, max_x) as u32;
                    let idx = ((ky + SMOOTH_MORE_RADIUS) * 5 + (kx + SMOOTH_MORE_RADIUS)) as usize;
                    let weight = SMOOTH_MORE_KERNEL[idx];
                    let px = img.get_pixel(nx, ny);
                    for (acc, channel) in sum.iter_mut().zip(px.0.iter()) {
                        *acc += u32::from(*channel) * weight;
                    }
                }
            }

            // Weights sum to the scale, so the rounded mean always fits in a u8
            let avg = |s: u32| ((s + SMOOTH_MORE_SCALE / 2) / SMOOTH_MORE_SCALE) as u8;
            output.put_pixel(x, y, Rgb([avg(sum[0]), avg(sum[1]), avg(sum[2])]));
        }
    }

    output
}

/// Per-channel median over a 3x3 window.
pub fn median_3x3(img: &RgbImage) -> RgbImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }
    imageproc::filter::median_filter(img, MEDIAN_RADIUS, MEDIAN_RADIUS)
}

/// Scale every channel by `factor`, clamped to the u8 range.
pub fn adjust_brightness(img: &mut RgbImage, factor: f32) {
    for px in img.pixels_mut() {
        for channel in px.0.iter_mut() {
            *channel = (f32::from(*channel) * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
}
