/// Platform-agnostic input events.
///
/// These are fed into a [`ZoomInputSource`](super::ZoomInputSource), which
/// turns them into a per-frame zoom delta.
///
/// # Example
///
/// ```ignore
/// if scroll.handle_event(&InputEvent::Scroll { delta: 1.0 }) {
///     controller.update_input(&mut scroll, dt);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key in winit `KeyCode` debug format (`"PageUp"`,
        /// `"KeyZ"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

impl InputEvent {
    /// Key event for a key string.
    pub fn key(code: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            code: code.into(),
            pressed,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseScrollDelta> for InputEvent {
    fn from(delta: winit::event::MouseScrollDelta) -> Self {
        let delta = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 * 0.01
            }
        };
        Self::Scroll { delta }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Key event for a winit physical key code.
    #[must_use]
    pub fn from_key_code(code: winit::keyboard::KeyCode, pressed: bool) -> Self {
        Self::key(format!("{code:?}"), pressed)
    }
}
