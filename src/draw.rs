use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::collection::RoiCollection;
use crate::domain::{PtI, BB};
use crate::shapes::{Circle, RoiShape};

/// Brush color of geometry still being dragged.
pub const COLOR_IN_PROGRESS: Rgb<u8> = Rgb([0, 0, 255]);
/// Brush color of committed geometry.
pub const COLOR_FINISHED: Rgb<u8> = Rgb([0, 255, 0]);

/// The session's commit path and [`visualize`](visualize) share these stamp
/// helpers, so the coordinates a caller sees rendered are exactly the ones
/// the extractor will crop with.
pub fn stamp_rect(im: &mut RgbImage, bb: BB, color: Rgb<u8>) {
    if bb.is_degenerate() {
        return;
    }
    draw_hollow_rect_mut(
        im,
        Rect::at(bb.x as i32, bb.y as i32).of_size(bb.w, bb.h),
        color,
    );
}

pub fn stamp_line(im: &mut RgbImage, p1: PtI, p2: PtI, color: Rgb<u8>) {
    draw_line_segment_mut(im, p1.into(), p2.into(), color);
}

/// Outline plus the defining radius segment, as the user sees while dragging.
pub fn stamp_circle(im: &mut RgbImage, circle: &Circle, color: Rgb<u8>) {
    stamp_line(im, circle.center, circle.edge, color);
    draw_hollow_circle_mut(
        im,
        circle.center.into(),
        circle.radius.round() as i32,
        color,
    );
}

/// Edges between consecutive vertices; the closing edge only if requested
/// (an open accumulation has none yet).
pub fn stamp_polygon_edges<'a>(
    im: &mut RgbImage,
    mut points: impl Iterator<Item = &'a PtI>,
    close: bool,
    color: Rgb<u8>,
) {
    let first = match points.next() {
        Some(p) => *p,
        None => return,
    };
    let mut prev = first;
    for p in points {
        stamp_line(im, prev, *p, color);
        prev = *p;
    }
    if close && prev != first {
        stamp_line(im, prev, first, color);
    }
}

fn stamp_shape(im: &mut RgbImage, shape: &RoiShape, color: Rgb<u8>) {
    match shape {
        RoiShape::Rect(bb) => stamp_rect(im, *bb, color),
        RoiShape::Line(line) => stamp_line(im, line.p1, line.p2, color),
        RoiShape::Circle(circle) => stamp_circle(im, circle, color),
        RoiShape::Poly(poly) => stamp_polygon_edges(im, poly.points().iter(), true, color),
    }
}

/// Stamps every descriptor of `rois` in the finished color onto a copy of
/// `im`. A malformed collection renders nothing; the caller's image is never
/// touched either way.
pub fn visualize(im: &RgbImage, rois: &RoiCollection) -> RgbImage {
    let mut im = im.clone();
    if rois.is_malformed() {
        return im;
    }
    for (_, shape) in rois.iter() {
        stamp_shape(&mut im, shape, COLOR_FINISHED);
    }
    im
}
