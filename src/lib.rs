//! Interactive region-of-interest annotation on raster frames.
//!
//! A display collaborator owns the window and event loop; it feeds pointer
//! events into an [`AnnotationSession`](AnnotationSession), shows the
//! session's preview frame after each event, and receives an
//! [`RoiCollection`](RoiCollection) of typed shape descriptors once all
//! requested instances are drawn (or an empty collection if the user bailed
//! out). [`visualize`](visualize) stamps a finished collection onto a frame
//! copy and [`crop`](crop) extracts one masked sub-image per region.

mod annotate;
mod collection;
mod crop;
pub mod domain;
mod draw;
mod events;
mod result;
mod shapes;
pub mod tracing_setup;

pub use annotate::{select_rectangles, AnnotationSession, BoxSelector, SessionState};
pub use collection::RoiCollection;
pub use crop::crop;
pub use draw::{visualize, COLOR_FINISHED, COLOR_IN_PROGRESS};
pub use events::PointerEvent;
pub use result::{trace_ok_warn, RoiError, RoiResult};
pub use shapes::{Circle, Line, RoiShape, ShapeKind};
