//! Zoom input strategies.
//!
//! Each device turns its own events into the single scalar the zoom
//! controller consumes per frame. Negative values zoom in.

use super::event::InputEvent;
use crate::options::InputOptions;

/// Produces a per-frame zoom delta.
pub trait ZoomInputSource {
    /// Offer an event to the source. Returns true if it was consumed.
    fn handle_event(&mut self, _event: &InputEvent) -> bool {
        false
    }

    /// Zoom delta gathered since the last poll, for a frame of `dt`
    /// seconds. Draining: a second poll without new events returns only
    /// what continuous input (held keys) adds.
    fn poll_zoom(&mut self, dt: f32) -> f32;
}

/// Mouse-wheel zoom. Scroll lines accumulate until polled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollZoom {
    sensitivity: f32,
    invert: bool,
    accumulated: f32,
}

impl ScrollZoom {
    /// Wheel source with the given per-line sensitivity.
    #[must_use]
    pub fn new(sensitivity: f32, invert: bool) -> Self {
        Self {
            sensitivity,
            invert,
            accumulated: 0.0,
        }
    }

    /// Wheel source configured from input options.
    #[must_use]
    pub fn from_options(opts: &InputOptions) -> Self {
        Self::new(opts.scroll_sensitivity, opts.invert_scroll)
    }

    /// Record scroll lines directly (positive = zoom in).
    pub fn push_scroll(&mut self, lines: f32) {
        self.accumulated += lines;
    }
}

impl ZoomInputSource for ScrollZoom {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Scroll { delta } => {
                self.push_scroll(*delta);
                true
            }
            InputEvent::Key { .. } => false,
        }
    }

    fn poll_zoom(&mut self, _dt: f32) -> f32 {
        let lines = std::mem::take(&mut self.accumulated);
        let sign = if self.invert { 1.0 } else { -1.0 };
        sign * lines * self.sensitivity
    }
}

/// Held-key zoom at a constant rate per second.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardZoom {
    zoom_in_key: String,
    zoom_out_key: String,
    speed: f32,
    zoom_in_held: bool,
    zoom_out_held: bool,
}

impl KeyboardZoom {
    /// Keyboard source bound to the two key strings.
    pub fn new(
        zoom_in_key: impl Into<String>,
        zoom_out_key: impl Into<String>,
        speed: f32,
    ) -> Self {
        Self {
            zoom_in_key: zoom_in_key.into(),
            zoom_out_key: zoom_out_key.into(),
            speed,
            zoom_in_held: false,
            zoom_out_held: false,
        }
    }

    /// Keyboard source configured from input options.
    #[must_use]
    pub fn from_options(opts: &InputOptions) -> Self {
        Self::new(
            opts.zoom_in_key.as_str(),
            opts.zoom_out_key.as_str(),
            opts.keyboard_zoom_speed,
        )
    }

    /// Release both keys (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.zoom_in_held = false;
        self.zoom_out_held = false;
    }
}

impl ZoomInputSource for KeyboardZoom {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        let InputEvent::Key { code, pressed } = event else {
            return false;
        };
        if *code == self.zoom_in_key {
            self.zoom_in_held = *pressed;
            true
        } else if *code == self.zoom_out_key {
            self.zoom_out_held = *pressed;
            true
        } else {
            false
        }
    }

    fn poll_zoom(&mut self, dt: f32) -> f32 {
        let direction = f32::from(u8::from(self.zoom_out_held))
            - f32::from(u8::from(self.zoom_in_held));
        direction * self.speed * dt
    }
}

/// Several devices feeding one controller.
#[derive(Default)]
pub struct CombinedZoom {
    sources: Vec<Box<dyn ZoomInputSource>>,
}

impl CombinedZoom {
    /// Empty combination (always zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll wheel plus zoom keys, as configured.
    #[must_use]
    pub fn from_options(opts: &InputOptions) -> Self {
        Self::new()
            .with(ScrollZoom::from_options(opts))
            .with(KeyboardZoom::from_options(opts))
    }

    /// Add a source.
    #[must_use]
    pub fn with(mut self, source: impl ZoomInputSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Number of combined sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources are combined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl ZoomInputSource for CombinedZoom {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.sources
            .iter_mut()
            .fold(false, |consumed, s| s.handle_event(event) || consumed)
    }

    fn poll_zoom(&mut self, dt: f32) -> f32 {
        self.sources.iter_mut().map(|s| s.poll_zoom(dt)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_up_zooms_in_and_drains() {
        let mut scroll = ScrollZoom::new(0.5, false);
        assert!(scroll.handle_event(&InputEvent::Scroll { delta: 1.0 }));
        assert!(scroll.handle_event(&InputEvent::Scroll { delta: 3.0 }));
        assert_eq!(scroll.poll_zoom(0.016), -2.0);
        assert_eq!(scroll.poll_zoom(0.016), 0.0);
    }

    #[test]
    fn inverted_scroll_zooms_out() {
        let mut scroll = ScrollZoom::new(1.0, true);
        scroll.push_scroll(1.5);
        assert_eq!(scroll.poll_zoom(0.016), 1.5);
    }

    #[test]
    fn scroll_ignores_keys() {
        let mut scroll = ScrollZoom::new(1.0, false);
        assert!(!scroll.handle_event(&InputEvent::key("PageUp", true)));
    }

    #[test]
    fn held_keys_scale_with_dt() {
        let mut keys = KeyboardZoom::new("PageUp", "PageDown", 2.0);
        assert_eq!(keys.poll_zoom(0.5), 0.0);

        assert!(keys.handle_event(&InputEvent::key("PageUp", true)));
        assert_eq!(keys.poll_zoom(0.5), -1.0);
        // Held keys keep producing input every frame.
        assert_eq!(keys.poll_zoom(0.25), -0.5);

        assert!(keys.handle_event(&InputEvent::key("PageDown", true)));
        assert_eq!(keys.poll_zoom(0.5), 0.0);

        assert!(keys.handle_event(&InputEvent::key("PageUp", false)));
        assert_eq!(keys.poll_zoom(0.5), 1.0);

        keys.release_all();
        assert_eq!(keys.poll_zoom(0.5), 0.0);
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut keys = KeyboardZoom::new("PageUp", "PageDown", 2.0);
        assert!(!keys.handle_event(&InputEvent::key("KeyQ", true)));
        assert!(!keys.handle_event(&InputEvent::Scroll { delta: 1.0 }));
    }

    #[test]
    fn combined_sources_sum_and_share_events() {
        let opts = InputOptions::default();
        let mut combined = CombinedZoom::from_options(&opts);
        assert_eq!(combined.len(), 2);

        assert!(combined.handle_event(&InputEvent::Scroll { delta: 1.0 }));
        assert!(combined.handle_event(&InputEvent::key("PageDown", true)));
        assert!(!combined.handle_event(&InputEvent::key("Escape", true)));

        // -1 from the wheel, +2 * 0.5 from the held zoom-out key.
        assert_eq!(combined.poll_zoom(0.5), 0.0);
        assert_eq!(combined.poll_zoom(0.5), 1.0);
    }

    #[test]
    fn empty_combination_is_silent() {
        let mut combined = CombinedZoom::new();
        assert!(combined.is_empty());
        assert_eq!(combined.poll_zoom(1.0), 0.0);
    }
}
