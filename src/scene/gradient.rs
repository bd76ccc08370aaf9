//! Toon shading ramp: a 1-pixel-high RGBA strip, black → white → black.

/// RGBA8 pixels, `width` wide and 1 high.
pub fn toon_gradient(width: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * 4);
    let last = width.saturating_sub(1).max(1) as f32;
    for x in 0..width {
        let t = x as f32 / last;
        let level = 1.0 - (2.0 * t - 1.0).abs();
        let v = (level * 255.0).round() as u8;
        pixels.extend_from_slice(&[v, v, v, 255]);
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_edges_bright_middle() {
        let ramp = toon_gradient(257);
        assert_eq!(ramp.len(), 257 * 4);
        assert_eq!(&ramp[..4], &[0, 0, 0, 255]);
        assert_eq!(&ramp[128 * 4..128 * 4 + 4], &[255, 255, 255, 255]);
        assert_eq!(&ramp[256 * 4..], &[0, 0, 0, 255]);
    }

    #[test]
    fn single_pixel_is_black() {
        assert_eq!(toon_gradient(1), vec![0, 0, 0, 255]);
    }
}
