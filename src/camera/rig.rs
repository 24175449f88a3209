use glam::{Quat, Vec2, Vec3};

/// Orientation for yaw-then-pitch Euler angles in degrees.
///
/// Positive pitch tilts the view down toward the ground; yaw turns around
/// world +Y. Roll is ignored.
#[must_use]
pub fn orientation_from_euler(angles: Vec3) -> Quat {
    Quat::from_rotation_y(-angles.y.to_radians())
        * Quat::from_rotation_x(-angles.x.to_radians())
}

/// The camera the zoom controller writes to.
///
/// The controller is the only writer of position and field of view during
/// [`apply`](super::ZoomController::apply); rotation stays owned by the
/// rotation subsystem apart from the pitch adjustments made while pivoting.
pub trait CameraTransform {
    /// World-space position.
    fn position(&self) -> Vec3;
    /// Move the camera.
    fn set_position(&mut self, position: Vec3);
    /// Vertical field of view in degrees.
    fn field_of_view(&self) -> f32;
    /// Change the vertical field of view.
    fn set_field_of_view(&mut self, fov: f32);
    /// `(pitch, yaw, roll)` in degrees.
    fn euler_angles(&self) -> Vec3;
    /// Replace the Euler angles.
    fn set_euler_angles(&mut self, angles: Vec3);
    /// Screen-space center of the viewport, in pixels.
    fn viewport_center(&self) -> Vec2;

    /// Mirror a field-of-view change onto a secondary UI camera, if any.
    fn set_ui_field_of_view(&mut self, _fov: f32) {}

    /// Unit view direction.
    fn forward(&self) -> Vec3 {
        orientation_from_euler(self.euler_angles()) * Vec3::NEG_Z
    }

    /// Unit up direction of the view.
    fn up(&self) -> Vec3 {
        orientation_from_euler(self.euler_angles()) * Vec3::Y
    }

    /// Pitch in degrees (positive looks down).
    fn pitch(&self) -> f32 {
        self.euler_angles().x
    }

    /// Replace the pitch, keeping yaw and roll.
    fn set_pitch(&mut self, pitch: f32) {
        let mut angles = self.euler_angles();
        angles.x = pitch;
        self.set_euler_angles(angles);
    }

    /// Camera height (world Y).
    fn height(&self) -> f32 {
        self.position().y
    }
}

/// Plain yaw/pitch camera with an optional UI camera sharing its field of
/// view.
#[derive(Debug, Clone, PartialEq)]
pub struct RigCamera {
    /// World-space position.
    pub position: Vec3,
    /// Downward tilt in degrees.
    pub pitch: f32,
    /// Heading in degrees around world +Y.
    pub yaw: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    /// Field of view of the overlay camera, when one is attached.
    pub ui_fov: Option<f32>,
}

impl Default for RigCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            pitch: 50.0,
            yaw: 0.0,
            fov: 45.0,
            viewport: Vec2::new(1280.0, 720.0),
            ui_fov: None,
        }
    }
}

impl RigCamera {
    /// Camera at `position` with the given pitch and yaw in degrees.
    #[must_use]
    pub fn new(position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            pitch,
            yaw,
            ..Self::default()
        }
    }

    /// Set the viewport size in pixels.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Vec2::new(width, height);
        self
    }

    /// Attach a UI camera whose field of view follows this one.
    #[must_use]
    pub fn with_ui_camera(mut self) -> Self {
        self.ui_fov = Some(self.fov);
        self
    }
}

impl CameraTransform for RigCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn field_of_view(&self) -> f32 {
        self.fov
    }

    fn set_field_of_view(&mut self, fov: f32) {
        self.fov = fov;
    }

    fn euler_angles(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, 0.0)
    }

    fn set_euler_angles(&mut self, angles: Vec3) {
        self.pitch = angles.x;
        self.yaw = angles.y;
    }

    fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    fn set_ui_field_of_view(&mut self, fov: f32) {
        if let Some(ui_fov) = self.ui_fov.as_mut() {
            *ui_fov = fov;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn level_camera_looks_down_negative_z() {
        let cam = RigCamera::new(Vec3::ZERO, 0.0, 0.0);
        assert!((cam.forward() - Vec3::NEG_Z).length() < EPS);
        assert!((cam.up() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn positive_pitch_looks_down() {
        let cam = RigCamera::new(Vec3::ZERO, 45.0, 0.0);
        let fwd = cam.forward();
        assert!(fwd.y < 0.0);
        assert!((fwd.y + 45.0_f32.to_radians().sin()).abs() < EPS);

        let straight_down = RigCamera::new(Vec3::ZERO, 90.0, 0.0);
        assert!((straight_down.forward() - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn yaw_keeps_forward_unit_length() {
        let cam = RigCamera::new(Vec3::ZERO, 30.0, 135.0);
        assert!((cam.forward().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn set_pitch_preserves_yaw() {
        let mut cam = RigCamera::new(Vec3::ZERO, 30.0, 90.0);
        cam.set_pitch(10.0);
        assert_eq!(cam.euler_angles(), Vec3::new(10.0, 90.0, 0.0));
    }

    #[test]
    fn ui_camera_mirrors_only_when_attached() {
        let mut plain = RigCamera::default();
        plain.set_ui_field_of_view(30.0);
        assert_eq!(plain.ui_fov, None);

        let mut overlay = RigCamera::default().with_ui_camera();
        overlay.set_ui_field_of_view(30.0);
        assert_eq!(overlay.ui_fov, Some(30.0));
    }

    #[test]
    fn viewport_center_is_half_size() {
        let cam = RigCamera::default().with_viewport(800.0, 600.0);
        assert_eq!(cam.viewport_center(), Vec2::new(400.0, 300.0));
    }
}
