//! Input model: the drag-state machine and engine actions.
//!
//! A pointer-down routes to exactly one of the two draggable handles — the
//! ring handle if the pointer is anywhere outside the triangle, the triangle
//! handle otherwise — and the resulting state decides how every subsequent
//! move is interpreted until pointer-up (or pointer-leave, which is treated
//! as pointer-up so a drag can never stick).

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which handle (if any) is currently being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The ring handle follows the pointer's angle around the hue ring.
    DraggingRing,
    /// The triangle handle follows the raw pointer while it stays inside
    /// the triangle.
    DraggingTriangle,
}

/// Result of an input event, for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing observable changed.
    None,
    /// A handle position or selected color changed; swatches need refreshing.
    SelectionChanged,
}
