//! Property tests for framebuffer packing and the drawing primitives

use proptest::prelude::*;
use ssd1322::render::{draw_line, fill_rect};
use ssd1322::{Dimensions, FrameBuffer};

fn framebuffer() -> FrameBuffer {
    FrameBuffer::new(Dimensions::default())
}

fn lit(fb: &FrameBuffer) -> usize {
    (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.pixel(x, y) != Some(0))
        .count()
}

proptest! {
    #[test]
    fn pixel_round_trips_and_keeps_neighbour(
        x in 0i32..256,
        y in 0i32..64,
        gray in any::<u8>(),
        neighbour in 0u8..16,
    ) {
        let mut fb = framebuffer();
        let other = x ^ 1;
        fb.set_pixel(other, y, neighbour);
        fb.set_pixel(x, y, gray);
        prop_assert_eq!(fb.pixel(x, y), Some(gray & 0x0F));
        prop_assert_eq!(fb.pixel(other, y), Some(neighbour));
    }

    #[test]
    fn out_of_bounds_pixel_changes_nothing(
        x in prop_oneof![-1000i32..0, 256i32..1000],
        y in -1000i32..1000,
        gray in any::<u8>(),
    ) {
        let mut fb = framebuffer();
        fb.fill(0x5);
        let before = fb.clone();
        fb.set_pixel(x, y, gray);
        fb.set_pixel(y.rem_euclid(256), y.abs() + 64, gray);
        prop_assert_eq!(fb, before);
    }

    #[test]
    fn fill_rect_touches_exactly_the_area(
        x in 0i32..200,
        y in 0i32..40,
        w in 1i32..56,
        h in 1i32..24,
    ) {
        let mut fb = framebuffer();
        fill_rect(&mut fb, x, y, w, h, 0xF);
        prop_assert_eq!(lit(&fb), (w * h) as usize);
        prop_assert_eq!(fb.pixel(x, y), Some(0xF));
        prop_assert_eq!(fb.pixel(x + w - 1, y + h - 1), Some(0xF));
    }

    #[test]
    fn line_includes_both_endpoints(
        x0 in 0i32..256,
        y0 in 0i32..64,
        x1 in 0i32..256,
        y1 in 0i32..64,
    ) {
        let mut fb = framebuffer();
        draw_line(&mut fb, x0, y0, x1, y1, 0xA);
        prop_assert_eq!(fb.pixel(x0, y0), Some(0xA));
        prop_assert_eq!(fb.pixel(x1, y1), Some(0xA));
        let steps = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        prop_assert_eq!(lit(&fb), steps);
    }

    #[test]
    fn fill_rect_anywhere_lights_the_clipped_area(
        x in any::<i32>(),
        y in any::<i32>(),
        w in prop_oneof![0i32..300, any::<i32>()],
        h in prop_oneof![0i32..100, any::<i32>()],
    ) {
        let mut fb = framebuffer();
        fill_rect(&mut fb, x, y, w, h, 0xF);
        let span = |start: i32, len: i32, limit: i64| {
            let start = i64::from(start);
            let end = start + i64::from(len.max(0));
            (end.min(limit) - start.max(0)).max(0) as usize
        };
        prop_assert_eq!(lit(&fb), span(x, w, 256) * span(y, h, 64));
    }

    #[test]
    fn line_with_any_endpoints_keeps_visible_endpoints(
        x0 in any::<i32>(),
        y0 in any::<i32>(),
        x1 in 0i32..256,
        y1 in 0i32..64,
    ) {
        let mut fb = framebuffer();
        draw_line(&mut fb, x0, y0, x1, y1, 0xA);
        prop_assert_eq!(fb.pixel(x1, y1), Some(0xA));
    }
}
