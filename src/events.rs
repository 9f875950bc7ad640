use crate::domain::PtI;

/// Input delivered by the display collaborator, one event per handler call.
/// Coordinates are integer frame-space positions. `Cancel` is the single
/// distinguished abort signal (e.g., the escape key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(PtI),
    Move(PtI),
    Up(PtI),
    DoubleClick(PtI),
    Cancel,
}

impl PointerEvent {
    pub fn down(x: u32, y: u32) -> Self {
        Self::Down((x, y).into())
    }
    pub fn moved(x: u32, y: u32) -> Self {
        Self::Move((x, y).into())
    }
    pub fn up(x: u32, y: u32) -> Self {
        Self::Up((x, y).into())
    }
    pub fn double_click(x: u32, y: u32) -> Self {
        Self::DoubleClick((x, y).into())
    }
}
