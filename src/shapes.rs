use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::domain::{Polygon, PtI, BB};

/// The shape kinds a user can be asked to draw. `Cuboid` is declared for
/// API completeness but has no implementation behind it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Line,
    Circle,
    Polygon,
    Cuboid,
}
impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Cuboid => "cuboid",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub p1: PtI,
    pub p2: PtI,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: PtI,
    pub edge: PtI,
    pub radius: f64,
}
impl Circle {
    /// The radius is derived, not free; this is the only way to build a circle.
    pub fn from_center_edge(center: PtI, edge: PtI) -> Self {
        Self {
            center,
            edge,
            radius: center.dist(edge),
        }
    }
}

/// One region of interest as typed geometry. One variant per drawable kind;
/// cuboids are rejected before anything could produce one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum RoiShape {
    Rect(BB),
    Line(Line),
    Circle(Circle),
    Poly(Polygon),
}
impl RoiShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            RoiShape::Rect(_) => ShapeKind::Rectangle,
            RoiShape::Line(_) => ShapeKind::Line,
            RoiShape::Circle(_) => ShapeKind::Circle,
            RoiShape::Poly(_) => ShapeKind::Polygon,
        }
    }
}
