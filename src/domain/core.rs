use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::result::RoiResult;
use crate::roierr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Point<T>;
    fn add(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Point<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl<T> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}
impl<T> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> (T, T) {
        (p.x, p.y)
    }
}

pub type PtI = Point<u32>;
pub type PtF = Point<f64>;

impl PtI {
    pub fn from_signed(p: (i32, i32)) -> RoiResult<Self> {
        if p.0 < 0 || p.1 < 0 {
            Err(roierr!(
                "cannot create point with negative coordinates, {:?}",
                p
            ))
        } else {
            Ok(Self {
                x: p.0 as u32,
                y: p.1 as u32,
            })
        }
    }
    /// Euclidean distance, e.g., between a circle's center and its edge point.
    pub fn dist(&self, other: PtI) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<PtI> for PtF {
    fn from(p: PtI) -> Self {
        (p.x as f64, p.y as f64).into()
    }
}
impl From<PtI> for (f32, f32) {
    fn from(p: PtI) -> Self {
        (p.x as f32, p.y as f32)
    }
}
impl From<PtI> for (i32, i32) {
    fn from(p: PtI) -> Self {
        (p.x as i32, p.y as i32)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub w: u32,
    pub h: u32,
}
impl Shape {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    pub fn from_im<I>(im: &I) -> Self
    where
        I: image::GenericImageView,
    {
        Self {
            w: im.width(),
            h: im.height(),
        }
    }
}
