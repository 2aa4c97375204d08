//! Pointer input for the star row.
//!
//! A per-frame snapshot of pointer position and button edges. The widget
//! only ever needs the pointer; keyboard input is the host's concern.

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}

/// Pointer state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Current pointer X position.
    pub x: f32,
    /// Current pointer Y position.
    pub y: f32,
    /// Buttons pressed this frame.
    buttons_pressed: u8,
    /// Buttons released this frame.
    buttons_released: u8,
    /// Buttons currently held.
    buttons_down: u8,
}

impl PointerState {
    /// Creates a new empty pointer state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing edge state. Held buttons persist.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed = 0;
        self.buttons_released = 0;
    }

    /// Updates the pointer position.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Records a button press.
    pub fn button_down(&mut self, button: PointerButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a button release.
    pub fn button_up(&mut self, button: PointerButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Returns true if the button was pressed this frame.
    #[must_use]
    pub fn pressed(&self, button: PointerButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the button was released this frame.
    #[must_use]
    pub fn released(&self, button: PointerButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns true if the button is currently held.
    #[must_use]
    pub fn held(&self, button: PointerButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: PointerButton) -> u8 {
        match button {
            PointerButton::Left => 1,
            PointerButton::Right => 2,
            PointerButton::Middle => 4,
        }
    }
}
