//! Near-minimum-height pivot.
//!
//! Once the camera drops into the last `range_before_min` units above its
//! minimum height it stops behaving like a plain dolly: it retreats
//! horizontally and flattens its pitch toward `target_angle`, both in
//! proportion to how deep into the range it is.

use glam::Vec3;

use super::rig::CameraTransform;
use super::services::{PanState, RotationState};
use crate::options::PivotOptions;
use crate::util::math::{
    clamp_between, frame_weight, horizontal, inverse_lerp, lerp,
};

/// Pivot state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PivotState {
    /// Normal zoom behavior.
    #[default]
    Idle,
    /// Camera is inside the pivot range.
    Pivoting {
        /// Ground-plane point the camera retreats to at minimum height.
        reference: Vec3,
        /// Unit horizontal view direction captured on entry.
        axis: Vec3,
    },
}

/// Pose the pivot eases the camera toward on one frame.
#[derive(Debug, Clone, Copy)]
struct PivotTarget {
    reference: Vec3,
    axis: Vec3,
    /// 0 at minimum height, 1 at the top of the range.
    progress: f32,
}

/// What a pivot step did, for change notification and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotTransition {
    /// No state change.
    None,
    /// Entered the pivot range from a neutral rotation.
    Entered,
    /// Rose back out of the range; rotation reset requested.
    Exited,
    /// Pivot abandoned because the player took over rotation or panning.
    Interrupted,
}

impl PivotState {
    /// Whether the camera is currently pivoting.
    #[must_use]
    pub fn is_pivoting(&self) -> bool {
        matches!(self, Self::Pivoting { .. })
    }

    /// Run one frame of the state machine against the camera height.
    pub fn step(
        &mut self,
        opts: &PivotOptions,
        min_height: f32,
        dt: f32,
        camera: &mut dyn CameraTransform,
        rotation: &mut dyn RotationState,
        pan: &mut dyn PanState,
    ) -> PivotTransition {
        if !opts.enabled || opts.range_before_min <= 0.0 {
            if !self.is_pivoting() {
                return PivotTransition::None;
            }
            rotation.reset_rotation(true);
            *self = Self::Idle;
            log::debug!("pivot released after being disabled");
            return PivotTransition::Exited;
        }

        let height = camera.height();
        let ceiling = min_height + opts.range_before_min;

        match *self {
            Self::Idle => {
                if height < ceiling && rotation.has_initial_rotation() {
                    let axis = view_axis(camera);
                    let reference = horizontal(camera.position())
                        - axis * opts.backward_distance;
                    pan.set_follow_target(None);
                    *self = Self::Pivoting { reference, axis };
                    log::debug!(
                        "pivot entered at height {height:.2} \
                         (ceiling {ceiling:.2})"
                    );
                    return PivotTransition::Entered;
                }
                PivotTransition::None
            }
            Self::Pivoting { reference, axis } => {
                if height >= ceiling {
                    rotation.reset_rotation(true);
                    *self = Self::Idle;
                    log::debug!("pivot exited at height {height:.2}");
                    return PivotTransition::Exited;
                }
                if (opts.interrupt_on_rotation && rotation.is_rotating())
                    || (opts.interrupt_on_follow && pan.is_following_target())
                {
                    *self = Self::Idle;
                    log::debug!("pivot interrupted by rotation or follow");
                    return PivotTransition::Interrupted;
                }

                let reference =
                    reference + horizontal(pan.last_pan_direction());
                *self = Self::Pivoting { reference, axis };

                let target = PivotTarget {
                    reference,
                    axis,
                    progress: inverse_lerp(min_height, ceiling, height),
                };
                drive(opts, target, dt, camera, &*rotation, &*pan);
                PivotTransition::None
            }
        }
    }
}

/// Horizontal view direction, falling back to the view's up vector when
/// looking straight down.
fn view_axis(camera: &dyn CameraTransform) -> Vec3 {
    horizontal(camera.forward())
        .try_normalize()
        .or_else(|| horizontal(camera.up()).try_normalize())
        .unwrap_or(Vec3::NEG_Z)
}

/// Ease position and pitch toward the pose for `target.progress`.
fn drive(
    opts: &PivotOptions,
    target: PivotTarget,
    dt: f32,
    camera: &mut dyn CameraTransform,
    rotation: &dyn RotationState,
    pan: &dyn PanState,
) {
    let PivotTarget {
        reference,
        axis,
        progress,
    } = target;
    let goal = reference + axis * (opts.backward_distance * progress);
    let position = camera.position();
    let eased = horizontal(position)
        .lerp(goal, frame_weight(dt, pan.panning_speed()));
    camera.set_position(Vec3::new(eased.x, position.y, eased.z));

    let initial_pitch = rotation.initial_pitch();
    let target_pitch = clamp_between(
        lerp(opts.target_angle, initial_pitch, progress),
        opts.target_angle,
        initial_pitch,
    );
    let pitch = lerp(
        camera.pitch(),
        target_pitch,
        frame_weight(dt, rotation.rotation_speed()),
    );
    camera.set_pitch(pitch);
}
