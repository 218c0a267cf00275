//! Frame-coherent input state for the viewer.
//!
//! Events from winit are folded into per-frame sets (held / pressed /
//! released) that the update pass queries; `begin_frame` clears the edges.
//! On top of the raw state this adds what a pointer-driven UI needs: drag
//! accumulation with click-vs-drag discrimination and a typed-character
//! buffer for form fields.

use glam::Vec2;
use std::collections::HashSet;

pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

/// Pixels of cumulative pointer travel past which a press is a drag, not a
/// click.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;

/// Input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,

    mouse_held: HashSet<MouseButton>,
    mouse_pressed: HashSet<MouseButton>,
    mouse_released: HashSet<MouseButton>,

    cursor_position: Vec2,
    cursor_delta: Vec2,
    last_cursor: Option<Vec2>,

    /// Cumulative travel since the primary button went down.
    drag_travel: f32,
    primary_down: bool,

    scroll_steps: f32,

    /// Printable characters typed this frame (for form fields).
    typed: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.cursor_delta = Vec2::ZERO;
        self.scroll_steps = 0.0;
        self.typed.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Process typed text (winit `KeyEvent::text`). Control characters are
    /// dropped; backspace is handled as a key, not a character.
    pub fn process_text(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.typed.push(ch);
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.mouse_held.contains(&button) {
                    self.mouse_pressed.insert(button);
                }
                self.mouse_held.insert(button);
                if button == MouseButton::Left {
                    self.primary_down = true;
                    self.drag_travel = 0.0;
                }
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
                self.mouse_released.insert(button);
                if button == MouseButton::Left {
                    self.primary_down = false;
                }
            }
        }
    }

    /// Process a cursor position update.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        let position = Vec2::new(position.0 as f32, position.1 as f32);
        if let Some(last) = self.last_cursor {
            let delta = position - last;
            self.cursor_delta += delta;
            if self.primary_down {
                self.drag_travel += delta.length();
            }
        }
        self.last_cursor = Some(position);
        self.cursor_position = position;
    }

    /// Process scroll wheel movement in line steps.
    pub fn process_scroll_lines(&mut self, y: f32) {
        self.scroll_steps += y;
    }

    /// Process scroll wheel movement in pixels.
    pub fn process_scroll_pixels(&mut self, y: f64) {
        self.scroll_steps += (y / 40.0) as f32;
    }

    // Query methods

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    pub fn is_mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_released.contains(&button)
    }

    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }

    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    /// True while the primary button drags the orbit camera.
    pub fn is_dragging(&self) -> bool {
        self.primary_down && self.drag_travel > CLICK_DRAG_THRESHOLD
    }

    /// True when the primary button was released this frame without enough
    /// travel to count as a drag: a click.
    pub fn primary_clicked(&self) -> bool {
        self.mouse_released.contains(&MouseButton::Left)
            && self.drag_travel <= CLICK_DRAG_THRESHOLD
    }

    pub fn scroll_steps(&self) -> f32 {
        self.scroll_steps
    }

    /// Characters typed this frame.
    pub fn typed_chars(&self) -> &str {
        &self.typed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_within_threshold_is_a_click() {
        let mut input = InputState::new();
        input.process_cursor_position((100.0, 100.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.process_cursor_position((102.0, 101.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(input.primary_clicked());
    }

    #[test]
    fn long_drag_is_not_a_click() {
        let mut input = InputState::new();
        input.process_cursor_position((100.0, 100.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.process_cursor_position((200.0, 180.0));
        assert!(input.is_dragging());
        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!input.primary_clicked());
    }

    #[test]
    fn begin_frame_clears_edges_but_not_held() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(input.is_key_pressed(KeyCode::KeyW));
        input.begin_frame();
        assert!(!input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_held(KeyCode::KeyW));
    }

    #[test]
    fn typed_text_skips_control_characters() {
        let mut input = InputState::new();
        input.process_text("ab\u{8}c\n");
        assert_eq!(input.typed_chars(), "abc");
        input.begin_frame();
        assert_eq!(input.typed_chars(), "");
    }

    #[test]
    fn repeat_key_events_do_not_retrigger_pressed() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        input.begin_frame();
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        assert!(!input.is_key_pressed(KeyCode::KeyA));
    }
}
