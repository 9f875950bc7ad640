use serde::{Deserialize, Serialize};

use crate::shapes::{RoiShape, ShapeKind};

/// Ordered, kind-tagged container of finished shape descriptors. Indices are
/// completion indices, assigned densely in the order shapes were finished.
///
/// A collection handed to callers is either complete (one item per requested
/// instance) or empty; an aborted session never leaks a partial result as if
/// it were a success.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RoiCollection {
    kind: Option<ShapeKind>,
    items: Vec<RoiShape>,
}
impl RoiCollection {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind: Some(kind),
            items: vec![],
        }
    }

    /// Appends the descriptor at completion index `idx`.
    ///
    /// # Panics
    /// If `idx` is not the next unfilled slot or the descriptor's kind does
    /// not match the collection's kind. Both are contract violations of the
    /// annotation session, not user errors.
    pub fn insert(&mut self, idx: usize, shape: RoiShape) {
        assert_eq!(
            idx,
            self.items.len(),
            "completion indices are assigned densely in order"
        );
        assert_eq!(
            Some(shape.kind()),
            self.kind,
            "all items of a collection share their kind"
        );
        self.items.push(shape);
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }
    pub fn get(&self, idx: usize) -> Option<&RoiShape> {
        self.items.get(idx)
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RoiShape)> + '_ {
        self.items.iter().enumerate()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// A collection without kind or items carries nothing usable. Renderer
    /// and extractor treat it as a no-op input.
    pub fn is_malformed(&self) -> bool {
        self.kind.is_none() || self.items.is_empty()
    }

    /// Drops everything, including the kind tag. Called when a session ends
    /// before all requested instances were drawn.
    pub fn clear(&mut self) {
        self.kind = None;
        self.items.clear();
    }
}
