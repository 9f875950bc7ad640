use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::core::{PtI, Shape};
use crate::result::RoiResult;
use crate::roierr;

/// Axis-aligned box in pixel coordinates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BB {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}
impl BB {
    /// `[x, y, w, h]`
    pub fn from_arr(a: &[u32; 4]) -> Self {
        BB {
            x: a[0],
            y: a[1],
            w: a[2],
            h: a[3],
        }
    }

    /// Box spanned by two arbitrary corners.
    pub fn from_points(p1: PtI, p2: PtI) -> Self {
        let x_min = p1.x.min(p2.x);
        let y_min = p1.y.min(p2.y);
        let x_max = p1.x.max(p2.x);
        let y_max = p1.y.max(p2.y);
        BB {
            x: x_min,
            y: y_min,
            w: x_max - x_min,
            h: y_max - y_min,
        }
    }

    /// Bounding box of a vertex set.
    pub fn from_points_iter(points: impl Iterator<Item = PtI> + Clone) -> RoiResult<Self> {
        let x_iter = points.clone().map(|p| p.x);
        let y_iter = points.map(|p| p.y);
        let min_x = x_iter.clone().min().ok_or_else(|| roierr!("empty vertex set"))?;
        let min_y = y_iter.clone().min().ok_or_else(|| roierr!("empty vertex set"))?;
        let max_x = x_iter.max().ok_or_else(|| roierr!("empty vertex set"))?;
        let max_y = y_iter.max().ok_or_else(|| roierr!("empty vertex set"))?;
        Ok(BB::from_points(
            (min_x, min_y).into(),
            (max_x, max_y).into(),
        ))
    }

    pub fn from_shape(shape: Shape) -> Self {
        BB {
            x: 0,
            y: 0,
            w: shape.w,
            h: shape.h,
        }
    }

    pub fn x_max(&self) -> u32 {
        self.x + self.w
    }
    pub fn y_max(&self) -> u32 {
        self.y + self.h
    }
    pub fn x_range(&self) -> Range<u32> {
        self.x..self.x_max()
    }
    pub fn y_range(&self) -> Range<u32> {
        self.y..self.y_max()
    }
    pub fn min(&self) -> PtI {
        (self.x, self.y).into()
    }
    pub fn max(&self) -> PtI {
        (self.x_max(), self.y_max()).into()
    }
    pub fn shape(&self) -> Shape {
        Shape::new(self.w, self.h)
    }
    pub fn is_degenerate(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn contains(&self, p: PtI) -> bool {
        self.x <= p.x && p.x < self.x_max() && self.y <= p.y && p.y < self.y_max()
    }
    pub fn is_contained_in_image(&self, shape: Shape) -> bool {
        self.x_max() <= shape.w && self.y_max() <= shape.h
    }

    pub fn intersect(self, other: BB) -> BB {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let x_max = self.x_max().min(other.x_max());
        let y_max = self.y_max().min(other.y_max());
        BB {
            x,
            y,
            w: x_max.saturating_sub(x),
            h: y_max.saturating_sub(y),
        }
    }

    /// Bounding square `[c - r, c + r]` on both axes, clipped at the frame
    /// origin. Used for circle crops.
    pub fn centered_square(center: PtI, radius: f64) -> Self {
        let r = radius.round() as i64;
        let x_min = (center.x as i64 - r).max(0) as u32;
        let y_min = (center.y as i64 - r).max(0) as u32;
        let x_max = (center.x as i64 + r).max(0) as u32;
        let y_max = (center.y as i64 + r).max(0) as u32;
        BB::from_points((x_min, y_min).into(), (x_max, y_max).into())
    }
}
