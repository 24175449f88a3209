use glam::Vec3;

use super::offset::OffsetRamp;
use super::pivot::{PivotState, PivotTransition};
use super::rig::CameraTransform;
use super::services::{
    ChangeNotifier, PanState, RotationState, TerrainFilter, TerrainQuery,
};
use crate::error::{ConfigError, ZoomError};
use crate::input::ZoomInputSource;
use crate::options::ZoomOptions;
use crate::util::math::{frame_weight, inverse_lerp, lerp};

/// Smoothed zoom values this small are snapped to rest.
const SETTLE_EPSILON: f32 = 1e-4;

/// Mutable per-frame state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomRuntimeState {
    /// Input recorded since the last [`ZoomController::apply`].
    pub pending_zoom_value: f32,
    /// Transform mode: exponentially smoothed input. FOV mode: normalized
    /// zoom level in `[0, 1]`.
    pub smoothed_zoom_value: f32,
    /// Terrain-offset compensation ramp.
    pub offset: OffsetRamp,
    /// Near-minimum-height pivot.
    pub pivot: PivotState,
}

/// Converts per-frame zoom input into camera height or field-of-view
/// changes, with terrain-offset compensation and near-ground pivoting.
///
/// Built through [`ZoomController::builder`]. Call
/// [`record_zoom_input`](Self::record_zoom_input) (or
/// [`update_input`](Self::update_input)) any number of times per frame,
/// then [`apply`](Self::apply) exactly once.
pub struct ZoomController {
    config: ZoomOptions,
    filter: TerrainFilter,
    state: ZoomRuntimeState,
    terrain: Box<dyn TerrainQuery>,
    rotation: Box<dyn RotationState>,
    pan: Box<dyn PanState>,
    camera: Box<dyn CameraTransform>,
    notifier: Box<dyn ChangeNotifier>,
}

/// Collects the collaborators a [`ZoomController`] needs.
pub struct ZoomControllerBuilder {
    config: ZoomOptions,
    terrain: Option<Box<dyn TerrainQuery>>,
    rotation: Option<Box<dyn RotationState>>,
    pan: Option<Box<dyn PanState>>,
    camera: Option<Box<dyn CameraTransform>>,
    notifier: Option<Box<dyn ChangeNotifier>>,
}

impl ZoomControllerBuilder {
    /// Terrain height service.
    #[must_use]
    pub fn terrain(mut self, terrain: impl TerrainQuery + 'static) -> Self {
        self.terrain = Some(Box::new(terrain));
        self
    }

    /// Camera rotation subsystem.
    #[must_use]
    pub fn rotation(mut self, rotation: impl RotationState + 'static) -> Self {
        self.rotation = Some(Box::new(rotation));
        self
    }

    /// Camera panning subsystem.
    #[must_use]
    pub fn pan(mut self, pan: impl PanState + 'static) -> Self {
        self.pan = Some(Box::new(pan));
        self
    }

    /// Camera the controller writes to.
    #[must_use]
    pub fn camera(mut self, camera: impl CameraTransform + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    /// Listener for camera changes.
    #[must_use]
    pub fn notifier(
        mut self,
        notifier: impl ChangeNotifier + 'static,
    ) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Validate the configuration and place the camera at its initial
    /// height (or field of view).
    pub fn build(self) -> Result<ZoomController, ZoomError> {
        let result = self.try_build();
        if let Err(e) = &result {
            log::error!("zoom controller disabled: {e}");
        }
        result
    }

    fn try_build(self) -> Result<ZoomController, ZoomError> {
        let terrain = self
            .terrain
            .ok_or(ZoomError::CollaboratorUnavailable("terrain query"))?;
        let rotation = self
            .rotation
            .ok_or(ZoomError::CollaboratorUnavailable("rotation state"))?;
        let pan = self
            .pan
            .ok_or(ZoomError::CollaboratorUnavailable("pan state"))?;
        let camera = self
            .camera
            .ok_or(ZoomError::CollaboratorUnavailable("camera transform"))?;
        let notifier = self
            .notifier
            .ok_or(ZoomError::CollaboratorUnavailable("change notifier"))?;

        self.config.validate()?;
        let filter = resolve_filter(&self.config, terrain.as_ref())?;

        let mut controller = ZoomController {
            config: self.config,
            filter,
            state: ZoomRuntimeState::default(),
            terrain,
            rotation,
            pan,
            camera,
            notifier,
        };
        controller.place_initial();

        log::info!(
            "zoom controller ready ({} mode, height {}..{}, initial {})",
            if controller.config.use_fov {
                "field-of-view"
            } else {
                "transform"
            },
            controller.config.min_height,
            controller.config.max_height,
            controller.config.initial_height,
        );
        Ok(controller)
    }
}

fn resolve_filter(
    config: &ZoomOptions,
    terrain: &dyn TerrainQuery,
) -> Result<TerrainFilter, ConfigError> {
    if let Some(unknown) = config
        .height_offset_terrain_filter
        .iter()
        .find(|kind| !terrain.is_known_area(kind))
    {
        return Err(ConfigError::UnknownTerrainArea(unknown.to_string()));
    }
    Ok(config.height_offset_terrain_filter.iter().cloned().collect())
}

impl ZoomController {
    /// Start building a controller for `config`.
    #[must_use]
    pub fn builder(config: ZoomOptions) -> ZoomControllerBuilder {
        ZoomControllerBuilder {
            config,
            terrain: None,
            rotation: None,
            pan: None,
            camera: None,
            notifier: None,
        }
    }

    /// Add a zoom delta for this frame. Negative zooms in (lowers the
    /// camera or narrows the field of view).
    pub fn record_zoom_input(&mut self, delta: f32) {
        self.state.pending_zoom_value += delta;
    }

    /// Drain `source` into the pending zoom delta.
    pub fn update_input(&mut self, source: &mut dyn ZoomInputSource, dt: f32) {
        self.record_zoom_input(source.poll_zoom(dt));
    }

    /// Consume the pending input and update the camera for a frame of
    /// length `dt` seconds.
    ///
    /// A non-positive or non-finite `dt` is a paused frame: pending input
    /// is discarded and nothing else changes.
    pub fn apply(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            log::trace!("zoom apply skipped for dt={dt}");
            self.state.pending_zoom_value = 0.0;
            return;
        }

        let excess = self.terrain_excess();
        if self.config.use_fov {
            self.apply_fov(dt, excess);
        } else {
            self.apply_transform(dt, excess);
        }
        self.state.pending_zoom_value = 0.0;
    }

    /// Restore the initial height (or field of view) and clear all runtime
    /// state.
    pub fn reset(&mut self) {
        self.place_initial();
    }

    /// Replace the configuration of a running controller.
    ///
    /// On error the current configuration stays in effect. Switching
    /// between transform and field-of-view mode re-places the camera as
    /// [`reset`](Self::reset) does; otherwise the camera is left where it
    /// is and the new bounds apply from the next frame.
    pub fn set_config(&mut self, config: ZoomOptions) -> Result<(), ZoomError> {
        config.validate()?;
        let filter = resolve_filter(&config, self.terrain.as_ref())?;
        let mode_changed = config.use_fov != self.config.use_fov;
        self.config = config;
        self.filter = filter;
        if mode_changed {
            self.place_initial();
        }
        log::info!(
            "zoom options updated (height {}..{})",
            self.config.min_height,
            self.config.max_height
        );
        Ok(())
    }

    /// Snapshot of the runtime state.
    #[must_use]
    pub fn state(&self) -> ZoomRuntimeState {
        self.state
    }

    /// Whether the near-minimum-height pivot is engaged.
    #[must_use]
    pub fn is_pivoting(&self) -> bool {
        self.state.pivot.is_pivoting()
    }

    /// Whether input is pending or a transform-mode zoom is still easing.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.state.pending_zoom_value != 0.0
            || (!self.config.use_fov && self.state.smoothed_zoom_value != 0.0)
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomOptions {
        &self.config
    }

    /// Terrain filter used for height queries.
    #[must_use]
    pub fn terrain_filter(&self) -> &TerrainFilter {
        &self.filter
    }

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &dyn CameraTransform {
        self.camera.as_ref()
    }

    /// Mutable access to the controlled camera, for hosts that move it
    /// between frames (teleports, cinematic cuts).
    pub fn camera_mut(&mut self) -> &mut dyn CameraTransform {
        self.camera.as_mut()
    }

    fn place_initial(&mut self) {
        self.state = ZoomRuntimeState::default();
        let cfg = &self.config;
        if cfg.use_fov {
            let level =
                inverse_lerp(cfg.min_height, cfg.max_height, cfg.initial_height);
            self.state.smoothed_zoom_value = level;
            let fov = lerp(cfg.min_height, cfg.max_height, level);
            self.camera.set_field_of_view(fov);
            self.camera.set_ui_field_of_view(fov);
        } else {
            let mut position = self.camera.position();
            position.y = cfg.initial_height;
            self.camera.set_position(position);
        }
        self.notifier.notify_transform_changed();
    }

    /// Terrain height above the offset threshold under the viewport center.
    /// `None` when the terrain is below the threshold or was not hit.
    fn terrain_excess(&self) -> Option<f32> {
        let threshold = self.config.offset_min_terrain_height;
        self.terrain
            .height_at(self.camera.viewport_center(), &self.filter)
            .map(|point| point.y - threshold)
            .filter(|excess| *excess >= 0.0)
    }

    fn apply_fov(&mut self, dt: f32, excess: Option<f32>) {
        let cfg = &self.config;
        let level = (self.state.smoothed_zoom_value
            + self.state.pending_zoom_value)
            .clamp(0.0, 1.0);
        self.state.smoothed_zoom_value = level;

        let target = lerp(cfg.min_height, cfg.max_height, level)
            + excess.unwrap_or(0.0);
        let current = self.camera.field_of_view();
        let fov = lerp(current, target, frame_weight(dt, cfg.zoom_speed.rate));
        log::trace!("zoom fov: level {level:.3} target {target:.2} fov {fov:.2}");

        if (fov - current).abs() > f32::EPSILON {
            self.camera.set_field_of_view(fov);
            self.camera.set_ui_field_of_view(fov);
            self.notifier.notify_transform_changed();
        }
    }

    fn apply_transform(&mut self, dt: f32, excess: Option<f32>) {
        let before = self.camera.position();
        let pitch_before = self.camera.pitch();

        let transition = self.state.pivot.step(
            &self.config.pivot,
            self.config.min_height,
            dt,
            self.camera.as_mut(),
            self.rotation.as_mut(),
            self.pan.as_mut(),
        );

        let cfg = &self.config;
        let origin = self.camera.position();
        let backward = -self.camera.forward();

        let lift = self.state.offset.advance(
            excess,
            cfg.offset_restart_threshold,
            dt * cfg.zoom_speed.rate,
        );
        let mut translation = backward * lift;

        let pending = self.state.pending_zoom_value;
        let mut smoothed = lerp(
            self.state.smoothed_zoom_value,
            pending,
            cfg.zoom_speed.smoothing_factor,
        );
        if pending == 0.0 && smoothed.abs() < SETTLE_EPSILON {
            smoothed = 0.0;
        }
        self.state.smoothed_zoom_value = smoothed;

        let lowering_allowed = smoothed < 0.0 && origin.y > cfg.min_height;
        let raising_allowed = smoothed > 0.0 && origin.y < cfg.max_height;
        if lowering_allowed || raising_allowed {
            translation += backward * (cfg.zoom_speed.rate * smoothed);
        }

        let next = clamp_height(origin, origin + translation, cfg);
        if next != origin {
            self.camera.set_position(next);
        }
        log::trace!(
            "zoom transform: height {:.3} smoothed {smoothed:.4} lift {lift:.4}",
            next.y
        );

        if next != before
            || self.camera.pitch() != pitch_before
            || transition != PivotTransition::None
        {
            self.notifier.notify_transform_changed();
        }
    }
}

/// Keep the proposed height inside the bounds by falling back to the
/// pre-update height.
fn clamp_height(origin: Vec3, proposed: Vec3, cfg: &ZoomOptions) -> Vec3 {
    if (cfg.min_height..=cfg.max_height).contains(&proposed.y) {
        return proposed;
    }
    Vec3::new(
        proposed.x,
        origin.y.clamp(cfg.min_height, cfg.max_height),
        proposed.z,
    )
}
