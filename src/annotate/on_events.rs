use tracing::warn;

use super::core::{AnnotationSession, SessionState};
use crate::domain::{reduce_to_hull, PtI};
use crate::result::trace_ok_warn;
use crate::draw::{stamp_circle, stamp_line, stamp_polygon_edges, COLOR_FINISHED, COLOR_IN_PROGRESS};
use crate::shapes::{Circle, Line, RoiShape, ShapeKind};

pub(super) fn on_pointer_down(s: &mut AnnotationSession, p: PtI) {
    match s.kind {
        ShapeKind::Line | ShapeKind::Circle => {
            s.drag_anchor = Some(p);
            s.state = SessionState::InProgress;
        }
        ShapeKind::Polygon => on_polygon_down(s, p),
        // rejected by the session factory
        ShapeKind::Rectangle | ShapeKind::Cuboid => (),
    }
}

pub(super) fn on_pointer_move(s: &mut AnnotationSession, p: PtI) {
    match s.kind {
        ShapeKind::Line => {
            if let Some(anchor) = s.drag_anchor {
                s.preview = s.baseline.clone();
                stamp_line(&mut s.preview, anchor, p, COLOR_IN_PROGRESS);
            }
        }
        ShapeKind::Circle => {
            if let Some(center) = s.drag_anchor {
                s.preview = s.baseline.clone();
                let circle = Circle::from_center_edge(center, p);
                stamp_circle(&mut s.preview, &circle, COLOR_IN_PROGRESS);
            }
        }
        ShapeKind::Polygon => {
            if s.state == SessionState::InProgress {
                if let Some(last) = s.vertices.last().copied() {
                    s.preview = s.baseline.clone();
                    stamp_line(&mut s.preview, last, p, COLOR_IN_PROGRESS);
                }
            }
        }
        ShapeKind::Rectangle | ShapeKind::Cuboid => (),
    }
}

pub(super) fn on_pointer_up(s: &mut AnnotationSession, p: PtI) {
    match s.kind {
        ShapeKind::Line => {
            if let Some(anchor) = s.drag_anchor.take() {
                stamp_line(&mut s.baseline, anchor, p, COLOR_FINISHED);
                s.commit(RoiShape::Line(Line { p1: anchor, p2: p }));
            }
        }
        ShapeKind::Circle => {
            if let Some(center) = s.drag_anchor.take() {
                let circle = Circle::from_center_edge(center, p);
                stamp_circle(&mut s.baseline, &circle, COLOR_FINISHED);
                s.commit(RoiShape::Circle(circle));
            }
        }
        // polygon vertices are committed on pointer-down, the shape on
        // double-click
        _ => (),
    }
}

fn on_polygon_down(s: &mut AnnotationSession, p: PtI) {
    if s.swallow_click {
        s.swallow_click = false;
        return;
    }
    s.state = SessionState::InProgress;
    s.vertices.push(p);
    if s.vertices.len() > 1 {
        // the new edge is committed right away, intermediate vertices are
        // not revocable
        let prev = s.vertices[s.vertices.len() - 2];
        stamp_line(&mut s.baseline, prev, p, COLOR_FINISHED);
    }
    s.preview = s.baseline.clone();
}

pub(super) fn on_double_click(s: &mut AnnotationSession, _p: PtI) {
    if s.kind != ShapeKind::Polygon {
        return;
    }
    if s.vertices.len() < 3 {
        warn!(
            "polygon finalized with {} vertices, keep clicking",
            s.vertices.len()
        );
        return;
    }
    // a collinear accumulation has no hull yet, the user can add more
    // vertices
    if let Some(poly) = trace_ok_warn(reduce_to_hull(&s.vertices)) {
        // redraw from the pre-polygon frame so edges of dropped concave
        // vertices vanish
        s.baseline = s.poly_baseline.clone();
        stamp_polygon_edges(&mut s.baseline, poly.points().iter(), true, COLOR_FINISHED);
        s.poly_baseline = s.baseline.clone();
        s.vertices.clear();
        s.swallow_click = true;
        s.commit(RoiShape::Poly(poly));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PointerEvent;
    use crate::tracing_setup::init_tracing_for_tests;
    use image::{Rgb, RgbImage};

    fn test_im() -> RgbImage {
        RgbImage::from_pixel(64, 64, Rgb([7, 7, 7]))
    }

    fn session(kind: ShapeKind, requested: usize) -> AnnotationSession {
        AnnotationSession::new(kind, &test_im(), requested).unwrap()
    }

    #[test]
    fn test_line_drag_commits_on_up() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Line, 1);
        s.handle_event(PointerEvent::down(5, 5));
        assert_eq!(s.state(), SessionState::InProgress);
        s.handle_event(PointerEvent::moved(20, 5));
        // live preview, not committed
        assert_eq!(s.preview().get_pixel(10, 5), &COLOR_IN_PROGRESS);
        assert_eq!(s.baseline().get_pixel(10, 5), &Rgb([7, 7, 7]));
        s.handle_event(PointerEvent::up(30, 5));
        assert!(s.is_complete());
        assert_eq!(s.state(), SessionState::Done);
        assert_eq!(s.baseline().get_pixel(10, 5), &COLOR_FINISHED);
        let rois = s.into_collection();
        assert_eq!(
            rois.get(0),
            Some(&RoiShape::Line(Line {
                p1: (5, 5).into(),
                p2: (30, 5).into(),
            }))
        );
    }

    #[test]
    fn test_preview_never_accumulates_strokes() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Line, 1);
        s.handle_event(PointerEvent::down(5, 5));
        s.handle_event(PointerEvent::moved(5, 40));
        assert_eq!(s.preview().get_pixel(5, 20), &COLOR_IN_PROGRESS);
        s.handle_event(PointerEvent::moved(40, 5));
        // the previous preview stroke is gone
        assert_eq!(s.preview().get_pixel(5, 20), &Rgb([7, 7, 7]));
        assert_eq!(s.preview().get_pixel(20, 5), &COLOR_IN_PROGRESS);
    }

    #[test]
    fn test_circle_commit_geometry_matches_preview() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Circle, 1);
        s.handle_event(PointerEvent::down(32, 32));
        s.handle_event(PointerEvent::moved(32, 40));
        s.handle_event(PointerEvent::up(32, 42));
        assert!(s.is_complete());
        let rois = s.into_collection();
        match rois.get(0) {
            Some(RoiShape::Circle(c)) => {
                assert_eq!(c.center, (32, 32).into());
                assert_eq!(c.edge, (32, 42).into());
                assert!((c.radius - 10.0).abs() < 1e-12);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_instance_completion_order() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Line, 2);
        s.handle_event(PointerEvent::down(1, 1));
        s.handle_event(PointerEvent::up(10, 1));
        assert!(!s.is_complete());
        assert_eq!(s.state(), SessionState::Idle);
        s.handle_event(PointerEvent::down(1, 5));
        s.handle_event(PointerEvent::up(10, 5));
        assert!(s.is_complete());
        let rois = s.into_collection();
        assert_eq!(rois.len(), 2);
        match (rois.get(0), rois.get(1)) {
            (Some(RoiShape::Line(l0)), Some(RoiShape::Line(l1))) => {
                assert_eq!(l0.p1, (1, 1).into());
                assert_eq!(l1.p1, (1, 5).into());
            }
            other => panic!("expected two lines, got {other:?}"),
        }
    }

    #[test]
    fn test_up_without_anchor_is_ignored() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Line, 1);
        s.handle_event(PointerEvent::up(10, 10));
        s.handle_event(PointerEvent::moved(20, 20));
        assert_eq!(s.completed_count(), 0);
        assert_eq!(s.preview(), &test_im());
    }

    #[test]
    fn test_polygon_hull_finalization() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Polygon, 1);
        for (x, y) in [(10u32, 10u32), (30, 10), (30, 30), (20, 20), (10, 30)] {
            s.handle_event(PointerEvent::down(x, y));
            s.handle_event(PointerEvent::up(x, y));
        }
        // committed edge of the open accumulation is on the baseline
        assert_eq!(s.baseline().get_pixel(20, 10), &COLOR_FINISHED);
        s.handle_event(PointerEvent::double_click(10, 30));
        assert!(s.is_complete());
        // the concave vertex (20, 20) is dropped by hull reduction
        let rois = s.into_collection();
        match rois.get(0) {
            Some(RoiShape::Poly(poly)) => {
                assert_eq!(poly.points().len(), 4);
                assert!(!poly.points().contains(&(20, 20).into()));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_polygon_swallows_click_after_double_click() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Polygon, 2);
        for (x, y) in [(10u32, 10u32), (30, 10), (30, 30)] {
            s.handle_event(PointerEvent::down(x, y));
            s.handle_event(PointerEvent::up(x, y));
        }
        s.handle_event(PointerEvent::double_click(30, 30));
        assert_eq!(s.completed_count(), 1);
        // the down belonging to the double-click must not open vertex
        // accumulation for the second polygon
        s.handle_event(PointerEvent::down(30, 30));
        s.handle_event(PointerEvent::up(30, 30));
        assert!(s.vertices.is_empty());
        s.handle_event(PointerEvent::down(40, 40));
        assert_eq!(s.vertices.len(), 1);
    }

    #[test]
    fn test_polygon_double_click_with_too_few_vertices() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Polygon, 1);
        s.handle_event(PointerEvent::down(10, 10));
        s.handle_event(PointerEvent::double_click(10, 10));
        assert_eq!(s.completed_count(), 0);
        // accumulation continues
        s.handle_event(PointerEvent::down(30, 10));
        s.handle_event(PointerEvent::down(30, 30));
        s.handle_event(PointerEvent::double_click(30, 30));
        assert!(s.is_complete());
    }

    #[test]
    fn test_cancel_discards_partial_result() {
        init_tracing_for_tests();
        let mut s = session(ShapeKind::Line, 3);
        s.handle_event(PointerEvent::down(1, 1));
        s.handle_event(PointerEvent::up(10, 1));
        assert_eq!(s.completed_count(), 1);
        s.handle_event(PointerEvent::Cancel);
        assert_eq!(s.state(), SessionState::Cancelled);
        // events after cancellation are ignored
        s.handle_event(PointerEvent::down(1, 5));
        s.handle_event(PointerEvent::up(10, 5));
        assert_eq!(s.completed_count(), 1);
        let rois = s.into_collection();
        assert!(rois.is_empty());
        assert_eq!(rois.kind(), None);
    }

    #[test]
    fn test_session_factory_rejections() {
        init_tracing_for_tests();
        let im = test_im();
        assert!(matches!(
            AnnotationSession::new(ShapeKind::Cuboid, &im, 1),
            Err(crate::RoiError::NotImplemented(_))
        ));
        assert!(matches!(
            AnnotationSession::new(ShapeKind::Rectangle, &im, 1),
            Err(crate::RoiError::Unsupported(_))
        ));
        assert!(AnnotationSession::new(ShapeKind::Line, &im, 0).is_err());
    }
}
