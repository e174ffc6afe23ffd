use crate::simulation::HeightField;

/// Map a wave height to an RGB triple.
///
/// Negative heights use the red channel, non-negative the blue one, with
/// brightness `round(255 * |h|)` saturating at 255.
pub fn color_of(h: f64) -> [u8; 3] {
    let brightness = (255.0 * h).round().clamp(-255.0, 255.0);
    if h < 0.0 {
        [brightness.abs() as u8, 0, 0]
    } else {
        // NaN lands here and casts to 0
        [0, 0, brightness as u8]
    }
}

/// Pack an RGB triple into the `unpack4x8unorm` layout (R in the low byte), opaque.
#[inline]
pub fn pack_rgba([r, g, b]: [u8; 3]) -> u32 {
    u32::from(r) | (u32::from(g) << 8) | (u32::from(b) << 16) | 0xFF00_0000
}

/// Color every cell of `field` into `out`, row-major (`y * nx + x`) as the
/// fragment shader reads it.
pub fn colorize(field: &HeightField, out: &mut Vec<u32>) {
    let (nx, ny) = (field.nx(), field.ny());
    out.clear();
    out.reserve(nx * ny);
    for y in 0..ny {
        for x in 0..nx {
            out.push(pack_rgba(color_of(field[(x, y)])));
        }
    }
}
