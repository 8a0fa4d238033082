//! Rotation handling
//!
//! Two mechanisms realize the four supported orientations:
//!
//! - **0/180 degrees**: logical and physical layout are identical; 180 is
//!   purely the controller's segment-remap and COM-scan-direction mirror
//!   flags, recomputed whenever the flip state changes.
//! - **90/270 degrees**: the controller cannot transpose, so drawing
//!   happens in a width/height-swapped logical buffer which is remapped
//!   into a physical-orientation bitmap before every transfer. Flip picks
//!   the remap direction (clockwise vs counter-clockwise); the mirror
//!   flags stay at their base values.
//!
//! The transpose touches every pixel, which makes refresh in the 90/270
//! family roughly a third slower than in the native family.

use crate::config::{Dimensions, Rotation};
use crate::framebuffer::Framebuffer;

/// Mirror flag settings for an orientation and flip state
///
/// Returns `(segment_remap, reverse_com_scan)`. For the native family the
/// flags follow the flip state together, which yields the four register
/// configurations the controller can express. Transposed orientations keep
/// the base configuration; their flip is realized in [`transpose`].
pub fn mirror_flags(rotation: Rotation, flipped: bool) -> (bool, bool) {
    if rotation.is_transposed() {
        (false, false)
    } else {
        (flipped, flipped)
    }
}

/// Remap a logical bitmap into physical orientation
///
/// Rebuilds `dst` (page-major, physical layout) in full from `src`, whose
/// dimensions must be the transposed physical dimensions. With
/// `counter_clockwise` false, the logical image appears rotated 90 degrees
/// clockwise on the panel: logical `(x, y)` lands at physical
/// `(width - 1 - y, x)`. With it true, the counter-clockwise map
/// `(y, height - 1 - x)` applies, which is how flip is realized for the
/// transposed family.
pub fn transpose(
    src: &Framebuffer,
    physical: Dimensions,
    counter_clockwise: bool,
    dst: &mut [u8],
) {
    let width = i32::from(physical.width);
    let height = i32::from(physical.height);
    let row = usize::from(physical.width);

    dst[..physical.buffer_size()].fill(0);
    for y in 0..i32::from(src.height()) {
        for x in 0..i32::from(src.width()) {
            if !src.get_pixel(x, y) {
                continue;
            }
            let (px, py) = if counter_clockwise {
                (y, height - 1 - x)
            } else {
                (width - 1 - y, x)
            };
            dst[(py / 8) as usize * row + px as usize] |= 1 << (py % 8);
        }
    }
}
