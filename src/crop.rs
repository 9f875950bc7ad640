use image::{imageops::crop_imm, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point as ImgPoint;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::collection::RoiCollection;
use crate::domain::{Polygon, Shape, BB};
use crate::result::{RoiError, RoiResult};
use crate::shapes::{Circle, RoiShape, ShapeKind};

/// Pixels where the mask is zero are blacked out, the rest is kept.
fn apply_mask(im: &RgbImage, mask: &GrayImage) -> RgbImage {
    let mut masked = im.clone();
    for (x, y, pixel) in masked.enumerate_pixels_mut() {
        if mask.get_pixel(x, y)[0] == 0 {
            *pixel = Rgb([0, 0, 0]);
        }
    }
    masked
}

/// Slices `bb` out of `im`, clipped against the frame. Degenerate boxes
/// yield an empty image rather than a panic.
fn slice(im: &RgbImage, bb: BB) -> RgbImage {
    let bb = bb.intersect(BB::from_shape(Shape::from_im(im)));
    crop_imm(im, bb.x, bb.y, bb.w, bb.h).to_image()
}

fn crop_circle(im: &RgbImage, circle: &Circle) -> RgbImage {
    let mut mask = GrayImage::new(im.width(), im.height());
    draw_filled_circle_mut(
        &mut mask,
        circle.center.into(),
        circle.radius.round() as i32,
        Luma([255]),
    );
    let masked = apply_mask(im, &mask);
    slice(&masked, BB::centered_square(circle.center, circle.radius))
}

fn crop_polygon(im: &RgbImage, poly: &Polygon) -> RgbImage {
    let mut mask = GrayImage::new(im.width(), im.height());
    let vertices = poly
        .points_iter()
        .map(|p| ImgPoint::new(p.x as i32, p.y as i32))
        .collect::<Vec<_>>();
    draw_polygon_mut(&mut mask, &vertices, Luma([255]));
    let masked = apply_mask(im, &mask);
    slice(&masked, poly.enclosing_bb())
}

/// Produces one sub-image per completion index. Rectangles are sliced
/// directly, circles and polygons are masked first and then sliced to their
/// bounding box. Lines have no area to crop and cuboids no implementation;
/// both are explicit errors so callers cannot mistake them for an empty
/// success. The input image is never modified.
pub fn crop(im: &RgbImage, rois: &RoiCollection) -> RoiResult<BTreeMap<usize, RgbImage>> {
    let kind = match rois.kind() {
        Some(ShapeKind::Line) => {
            return Err(RoiError::unsupported("a line region has no area to crop"))
        }
        Some(ShapeKind::Cuboid) => return Err(RoiError::not_implemented("cuboid regions")),
        None => {
            warn!("crop called with a kind-less collection");
            return Ok(BTreeMap::new());
        }
        Some(kind) => kind,
    };
    if rois.is_empty() {
        warn!("crop called with an empty collection");
        return Ok(BTreeMap::new());
    }
    debug!("cropping {} {kind} region(s)", rois.len());
    let mut cropped = BTreeMap::new();
    for (idx, shape) in rois.iter() {
        let sub = match shape {
            RoiShape::Rect(bb) => slice(im, *bb),
            RoiShape::Circle(circle) => crop_circle(im, circle),
            RoiShape::Poly(poly) => crop_polygon(im, poly),
            // unreachable through the session, the collection kind already
            // matched above
            RoiShape::Line(_) => {
                return Err(RoiError::unsupported("a line region has no area to crop"))
            }
        };
        cropped.insert(idx, sub);
    }
    Ok(cropped)
}
