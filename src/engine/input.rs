//! Host input modelling for the per-frame driver contract.
//!
//! The engine consumes already-edge-detected input; tracking raw key state
//! across frames is the host's job. [`EdgeTrigger`] is the named two-state
//! machine for that, firing once per Released -> Pressed transition.

/// Pointer button driving the paint operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Paints a live cell.
    Primary,
    /// Paints a dead cell.
    Secondary,
}

/// Pointer position and held button for one frame, in grid-cell units.
///
/// Coordinates may fall outside the surface (a cursor off the window); the
/// paint operation clamps them to the nearest edge cell. The host converts
/// display pixels to grid cells, including any scale factor.
#[derive(Debug, Clone, Copy)]
pub struct PointerInput {
    pub x: i32,
    pub y: i32,
    pub button: PointerButton,
}

/// Per-frame input to the engine tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// True only on the frame the pause toggle fired (already edge-detected).
    pub toggle_pause: bool,
    /// Pointer state, if a button is held this frame.
    pub pointer: Option<PointerInput>,
}

/// Raw key state tracked between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Released,
    Pressed,
}

/// Edge-triggered key tracker.
///
/// Feed the raw held state every frame; `update` returns true only on the
/// Released -> Pressed transition, so a held key fires once.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    state: KeyState,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this frame's raw "is pressed" state and report whether the
    /// toggle fired.
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && self.state == KeyState::Released;
        self.state = if pressed {
            KeyState::Pressed
        } else {
            KeyState::Released
        };
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_press_edge() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.update(true));
    }

    #[test]
    fn test_holding_fires_once() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(true));
    }

    #[test]
    fn test_refires_after_release() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.update(true));
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
    }

    #[test]
    fn test_released_never_fires() {
        let mut trigger = EdgeTrigger::new();
        assert!(!trigger.update(false));
        assert!(!trigger.update(false));
    }
}
