use image::RgbImage;
use tracing::{debug, warn};

use super::on_events;
use crate::collection::RoiCollection;
use crate::domain::PtI;
use crate::events::PointerEvent;
use crate::result::{RoiError, RoiResult};
use crate::shapes::{RoiShape, ShapeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No shape instance is being dragged or accumulated.
    Idle,
    /// Partial geometry of the current instance exists.
    InProgress,
    Done,
    Cancelled,
}

/// State machine turning a stream of pointer events into a completed
/// [`RoiCollection`](RoiCollection) for one shape kind.
///
/// A session is single-use: construct one per annotation request, feed it
/// events until [`is_complete`](Self::is_complete) or the display reports a
/// cancel, then consume it with [`into_collection`](Self::into_collection).
/// Nothing survives into the next request.
///
/// Every pointer move rebuilds the preview from the committed baseline, so
/// previews never accumulate stray strokes; only a completed instance writes
/// into the baseline.
pub struct AnnotationSession {
    pub(super) kind: ShapeKind,
    pub(super) requested: usize,
    pub(super) state: SessionState,
    /// Frame containing all committed geometry.
    pub(super) baseline: RgbImage,
    /// Frame state before the currently accumulating polygon. Needed on
    /// finalization when concave edges have to vanish again.
    pub(super) poly_baseline: RgbImage,
    /// What the display should show right now.
    pub(super) preview: RgbImage,
    /// Pointer-down position of a line/circle drag.
    pub(super) drag_anchor: Option<PtI>,
    /// Open polygon vertex accumulator.
    pub(super) vertices: Vec<PtI>,
    /// Suppresses the click component of a finalizing double-click.
    pub(super) swallow_click: bool,
    pub(super) rois: RoiCollection,
}

impl AnnotationSession {
    /// Fresh, fully-initialized session for `requested` instances of `kind`
    /// on a copy of `base`.
    ///
    /// Rectangles are gathered through the blocking
    /// [`select_rectangles`](super::select_rectangles) path instead and
    /// cuboids have no implementation; both are rejected here.
    pub fn new(kind: ShapeKind, base: &RgbImage, requested: usize) -> RoiResult<Self> {
        match kind {
            ShapeKind::Cuboid => {
                return Err(RoiError::not_implemented("cuboid annotation"));
            }
            ShapeKind::Rectangle => {
                return Err(RoiError::unsupported(
                    "rectangles are selected via a BoxSelector, see select_rectangles",
                ));
            }
            _ if requested == 0 => {
                return Err(RoiError::new("at least one instance must be requested"));
            }
            _ => (),
        }
        debug!("annotate {requested} {kind}(s)");
        Ok(Self {
            kind,
            requested,
            state: SessionState::Idle,
            baseline: base.clone(),
            poly_baseline: base.clone(),
            preview: base.clone(),
            drag_anchor: None,
            vertices: vec![],
            swallow_click: false,
            rois: RoiCollection::new(kind),
        })
    }

    /// Consumes one event from the display. Runs to completion before the
    /// next event may be dispatched; terminal sessions ignore further input.
    pub fn handle_event(&mut self, event: PointerEvent) {
        if matches!(self.state, SessionState::Done | SessionState::Cancelled) {
            return;
        }
        match event {
            PointerEvent::Down(p) => on_events::on_pointer_down(self, p),
            PointerEvent::Move(p) => on_events::on_pointer_move(self, p),
            PointerEvent::Up(p) => on_events::on_pointer_up(self, p),
            PointerEvent::DoubleClick(p) => on_events::on_double_click(self, p),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    /// Writes the committed baseline into the preview and advances the
    /// completion index. Called by the per-kind handlers after they stamped
    /// the finished shape onto the baseline.
    pub(super) fn commit(&mut self, shape: RoiShape) {
        let idx = self.rois.len();
        self.rois.insert(idx, shape);
        self.preview = self.baseline.clone();
        if self.rois.len() == self.requested {
            debug!("all {} {}(s) drawn", self.requested, self.kind);
            self.state = SessionState::Done;
        } else {
            self.state = SessionState::Idle;
        }
    }

    fn cancel(&mut self) {
        debug!(
            "cancelled after {} of {} {}(s)",
            self.rois.len(),
            self.requested,
            self.kind
        );
        self.drag_anchor = None;
        self.vertices.clear();
        self.preview = self.baseline.clone();
        self.state = SessionState::Cancelled;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
    pub fn is_complete(&self) -> bool {
        self.rois.len() == self.requested
    }
    pub fn completed_count(&self) -> usize {
        self.rois.len()
    }
    /// Frame the display should present, live geometry included.
    pub fn preview(&self) -> &RgbImage {
        &self.preview
    }
    /// Frame containing committed geometry only.
    pub fn baseline(&self) -> &RgbImage {
        &self.baseline
    }

    /// Ends the session. A partial result is a failure: the collection is
    /// emptied and a diagnostic emitted, so callers only ever see a complete
    /// collection or an empty one.
    pub fn into_collection(mut self) -> RoiCollection {
        if self.rois.len() != self.requested {
            warn!(
                "not all regions drawn ({} of {} {}(s)), discarding",
                self.rois.len(),
                self.requested,
                self.kind
            );
            self.rois.clear();
        }
        self.rois
    }
}
