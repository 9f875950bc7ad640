mod core;
mod on_events;
mod rect;

pub use self::core::{AnnotationSession, SessionState};
pub use rect::{select_rectangles, BoxSelector};
