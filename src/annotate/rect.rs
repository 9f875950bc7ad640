use image::RgbImage;
use tracing::{debug, warn};

use crate::collection::RoiCollection;
use crate::domain::BB;
use crate::draw::{stamp_rect, COLOR_FINISHED};
use crate::shapes::{RoiShape, ShapeKind};

/// External blocking box-selection primitive, e.g., a rubber-band selection
/// offered by the display. One call per rectangle instance.
pub trait BoxSelector {
    /// Blocks until the user spanned a box on `im`. A degenerate box
    /// (zero width or height) means the user aborted.
    fn select_box(&mut self, im: &RgbImage) -> BB;
}

/// Gathers `requested` rectangles through `selector`. Each finished box is
/// stamped onto the frame handed to the next selection. A single degenerate
/// selection fails fast: the whole batch is discarded, no matter how many
/// instances had already succeeded.
pub fn select_rectangles<S>(im: &RgbImage, requested: usize, selector: &mut S) -> RoiCollection
where
    S: BoxSelector,
{
    debug!("select {requested} rectangle(s)");
    let mut annotated = im.clone();
    let mut rois = RoiCollection::new(ShapeKind::Rectangle);
    for idx in 0..requested {
        let bb = selector.select_box(&annotated);
        if bb.is_degenerate() {
            warn!("degenerate selection at instance {idx}, aborting the batch");
            rois.clear();
            return rois;
        }
        stamp_rect(&mut annotated, bb, COLOR_FINISHED);
        rois.insert(idx, RoiShape::Rect(bb));
    }
    rois
}
