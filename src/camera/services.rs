//! Collaborator contracts the zoom controller is built against.
//!
//! Each subsystem the controller reads from or commands is injected once
//! through [`ZoomControllerBuilder`](super::ZoomControllerBuilder). The
//! controller never owns the state behind these traits; it only observes
//! it and issues the documented commands.

use std::fmt;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a terrain area category (ground, water, cliff, ...).
///
/// Area kinds are registered by the terrain service, so they are plain
/// codes here and validated against [`TerrainQuery::is_known_area`].
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct TerrainAreaKind(String);

impl TerrainAreaKind {
    /// Wrap an area code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw area code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerrainAreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of terrain area kinds a height query is restricted to.
///
/// An empty filter accepts every area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerrainFilter {
    kinds: FxHashSet<TerrainAreaKind>,
}

impl TerrainFilter {
    /// Filter that accepts every area.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether no restriction applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Whether terrain of `kind` passes the filter.
    #[must_use]
    pub fn accepts(&self, kind: &TerrainAreaKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(kind)
    }

    /// Iterate the kinds in the filter (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &TerrainAreaKind> {
        self.kinds.iter()
    }
}

impl FromIterator<TerrainAreaKind> for TerrainFilter {
    fn from_iter<I: IntoIterator<Item = TerrainAreaKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

/// Maps screen points to the terrain beneath them.
pub trait TerrainQuery {
    /// World-space terrain point under `screen_point`, restricted to areas
    /// passing `filter`. `None` when nothing was hit.
    fn height_at(
        &self,
        screen_point: Vec2,
        filter: &TerrainFilter,
    ) -> Option<Vec3>;

    /// Whether `kind` is a registered terrain area.
    fn is_known_area(&self, kind: &TerrainAreaKind) -> bool;
}

/// Read access to the camera rotation subsystem plus its reset command.
pub trait RotationState {
    /// Camera is at its initial (neutral) rotation.
    fn has_initial_rotation(&self) -> bool;
    /// Player is actively rotating the camera.
    fn is_rotating(&self) -> bool;
    /// Pitch in degrees the rotation subsystem started from.
    fn initial_pitch(&self) -> f32;
    /// Return the camera to its initial rotation.
    fn reset_rotation(&mut self, smooth: bool);
    /// Interpolation rate (per second) used for pitch changes.
    fn rotation_speed(&self) -> f32;
}

/// Opaque handle of an entity the pan subsystem can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowTarget(pub u64);

/// Read access to the camera panning subsystem plus its follow command.
pub trait PanState {
    /// Pan subsystem is tracking an entity.
    fn is_following_target(&self) -> bool;
    /// World-space displacement applied by panning during the last frame.
    fn last_pan_direction(&self) -> Vec3;
    /// Interpolation rate (per second) used for position changes.
    fn panning_speed(&self) -> f32;
    /// Start following `target`, or stop following with `None`.
    fn set_follow_target(&mut self, target: Option<FollowTarget>);
}

/// Receives a signal whenever the controller moves the camera or changes
/// its field of view (minimap, UI overlays, ...).
pub trait ChangeNotifier {
    /// Camera position or field of view changed.
    fn notify_transform_changed(&mut self);
}

impl<F: FnMut()> ChangeNotifier for F {
    fn notify_transform_changed(&mut self) {
        self();
    }
}

/// Notifier for hosts with no dependents to refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn notify_transform_changed(&mut self) {}
}
