use imageproc::geometry::convex_hull;
use imageproc::point::Point as ImgPoint;
use serde::{Deserialize, Serialize};

use super::bb::BB;
use super::core::{PtF, PtI, Shape};
use crate::result::RoiResult;
use crate::roierr;

fn intersect_y_axis_parallel(lineseg: (PtF, PtF), x_value: f64) -> Option<PtF> {
    let (p1, p2) = lineseg;
    if p1.x.min(p2.x) < x_value && p1.x.max(p2.x) >= x_value {
        let t = (x_value - p1.x) / (p2.x - p1.x);
        let y = p1.y + t * (p2.y - p1.y);
        Some(PtF { x: x_value, y })
    } else {
        None
    }
}

/// Convex outline in hull order. Vertices are never fewer than 3,
/// hence the constructor is fallible and the list private.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Polygon {
    points: Vec<PtI>,
    enclosing_bb: BB,
}
impl Polygon {
    pub fn from_vec(points: Vec<PtI>) -> RoiResult<Self> {
        if points.len() < 3 {
            return Err(roierr!(
                "a polygon needs at least 3 vertices, got {}",
                points.len()
            ));
        }
        let enclosing_bb = BB::from_points_iter(points.iter().copied())?;
        Ok(Self {
            points,
            enclosing_bb,
        })
    }
    #[allow(clippy::needless_lifetimes)]
    pub fn points_iter<'a>(&'a self) -> impl Iterator<Item = PtI> + 'a + Clone {
        self.points.iter().copied()
    }
    pub fn points(&self) -> &Vec<PtI> {
        &self.points
    }
    pub fn enclosing_bb(&self) -> BB {
        self.enclosing_bb
    }
    pub fn is_contained_in_image(&self, shape: Shape) -> bool {
        self.enclosing_bb.is_contained_in_image(shape)
    }
    fn lineseg_iter(&self) -> impl Iterator<Item = (PtI, PtI)> + '_ {
        self.points.iter().enumerate().map(|(i, p1)| {
            let p2 = if i < self.points.len() - 1 {
                self.points[i + 1]
            } else {
                self.points[0]
            };
            (*p1, p2)
        })
    }
    pub fn contains<P>(&self, point: P) -> bool
    where
        P: Into<PtF>,
    {
        // count the cuts of a ray from the point parallel to the y-axis
        //   odd number => inside
        //   even number => outside
        let point = point.into();
        let n_cuts = self
            .lineseg_iter()
            .filter(|(p1, p2)| {
                let p1: PtF = (*p1).into();
                let p2: PtF = (*p2).into();
                if let Some(p) = intersect_y_axis_parallel((p1, p2), point.x) {
                    p.y >= point.y
                } else {
                    false
                }
            })
            .count();
        n_cuts % 2 == 1
    }
}

/// Reduces a freeform vertex accumulation to its convex hull. Concave and
/// interior vertices are dropped and the rest is reordered into hull order.
/// Fails if the hull degenerates to fewer than 3 vertices (e.g., collinear
/// input).
pub fn reduce_to_hull(vertices: &[PtI]) -> RoiResult<Polygon> {
    let pts = vertices
        .iter()
        .map(|p| ImgPoint::new(p.x as i32, p.y as i32))
        .collect::<Vec<_>>();
    let hull = convex_hull(pts);
    let hull_points = hull
        .iter()
        .map(|p| PtI::from_signed((p.x, p.y)))
        .collect::<RoiResult<Vec<_>>>()?;
    Polygon::from_vec(hull_points)
}
