//! Drawing primitives
//!
//! Pixel, line and rectangle routines writing into a [`FrameBuffer`].
//! Everything clips silently at the panel edges.

use crate::framebuffer::FrameBuffer;

/// Set one pixel, ignoring coordinates outside the panel
pub fn draw_pixel(fb: &mut FrameBuffer, x: i32, y: i32, gray: u8) {
    fb.set_pixel(x, y, gray);
}

/// Draw a line with Bresenham's algorithm, both endpoints included
///
/// Only the steps that land on the panel are visited, so endpoints anywhere
/// in the `i32` range are fine.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, gray: u8) {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let x_major = dx >= dy;

    // a: the axis stepped every iteration, b: the one following the error term
    let (a0, b0, da, db, sa, sb, a_len) = if x_major {
        (x0, y0, dx, dy, (x1 - x0).signum(), (y1 - y0).signum(), fb.width())
    } else {
        (y0, x0, dy, dx, (y1 - y0).signum(), (x1 - x0).signum(), fb.height())
    };
    let a_len = i64::from(a_len);

    let (first, end) = match sa {
        1 => (-a0, a_len - a0),
        -1 => (a0 - a_len + 1, a0 + 1),
        _ => (0, 1),
    };
    let first = first.max(0);
    let end = end.min(da + 1);

    let e0 = i128::from(da / 2);
    for k in first..end {
        let b_steps = if da == 0 {
            0
        } else {
            ceil_div(i128::from(k) * i128::from(db) - e0, i128::from(da)) as i64
        };
        let a = a0 + k * sa;
        let b = b0 + b_steps * sb;
        let (x, y) = if x_major { (a, b) } else { (b, a) };
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            fb.set_pixel(x, y, gray);
        }
    }
}

/// Ceiling division by a positive divisor
fn ceil_div(n: i128, d: i128) -> i128 {
    -(-n).div_euclid(d)
}

/// Fill a rectangle as `w` vertical lines
///
/// Nothing is drawn when `w` or `h` is not positive. Columns off the panel
/// are skipped.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, gray: u8) {
    if w <= 0 || h <= 0 {
        return;
    }
    let bottom = y.saturating_add(h - 1);
    for column in x.max(0)..x.saturating_add(w).min(fb.width()) {
        draw_line(fb, column, y, column, bottom, gray);
    }
}
