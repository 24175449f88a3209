//! Camera zoom system.
//!
//! Provides the zoom controller with terrain-offset compensation and the
//! near-minimum-height pivot, plus the collaborator traits it is wired to.

/// Zoom controller, its builder and runtime state.
pub mod controller;
/// Terrain-offset compensation ramp.
pub mod offset;
/// Near-minimum-height pivot state machine.
pub mod pivot;
/// Camera transform trait and a plain yaw/pitch camera.
pub mod rig;
/// Terrain, rotation, pan and notification contracts.
pub mod services;

pub use controller::{ZoomController, ZoomControllerBuilder, ZoomRuntimeState};
pub use offset::OffsetRamp;
pub use pivot::{PivotState, PivotTransition};
pub use rig::{CameraTransform, RigCamera};
pub use services::{
    ChangeNotifier, FollowTarget, NullNotifier, PanState, RotationState,
    TerrainAreaKind, TerrainFilter, TerrainQuery,
};
