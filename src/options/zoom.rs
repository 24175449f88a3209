use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::services::TerrainAreaKind;
use crate::error::ConfigError;

/// Zoom rate and the interpolation weight used to lag raw input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom Speed", inline)]
#[serde(default)]
pub struct ZoomSpeed {
    /// Units moved per unit of smoothed zoom value (transform mode), or
    /// field-of-view convergence rate per second (FOV mode).
    #[schemars(title = "Rate", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub rate: f32,
    /// Weight applied each frame when easing toward the raw input.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing_factor: f32,
}

impl Default for ZoomSpeed {
    fn default() -> Self {
        Self {
            rate: 1.0,
            smoothing_factor: 0.1,
        }
    }
}

/// Tilt-and-retreat behavior applied as the camera nears its minimum height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pivot", inline)]
#[serde(default)]
pub struct PivotOptions {
    /// Whether the camera pivots at all.
    #[schemars(title = "Pivot Near Minimum Height")]
    pub enabled: bool,
    /// Height above `min_height` at which pivoting begins.
    #[schemars(title = "Range", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub range_before_min: f32,
    /// Pitch in degrees reached when the camera sits at `min_height`.
    #[schemars(title = "Target Angle", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub target_angle: f32,
    /// Horizontal distance the camera retreats by the time it reaches
    /// `min_height`.
    #[schemars(title = "Backward Distance", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub backward_distance: f32,
    /// Leave the pivot when the player starts rotating the camera.
    #[schemars(skip)]
    pub interrupt_on_rotation: bool,
    /// Leave the pivot when the pan system starts following a target.
    #[schemars(skip)]
    pub interrupt_on_follow: bool,
}

impl Default for PivotOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            range_before_min: 3.0,
            target_angle: 20.0,
            backward_distance: 4.0,
            interrupt_on_rotation: true,
            interrupt_on_follow: true,
        }
    }
}

/// Zoom controller configuration. Immutable once a controller is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
pub struct ZoomOptions {
    /// Zoom by narrowing/widening the field of view instead of moving the
    /// camera. Heights are then interpreted as field-of-view degrees.
    #[schemars(title = "Use Field of View")]
    pub use_fov: bool,
    /// Starting camera height.
    #[schemars(title = "Initial Height", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub initial_height: f32,
    /// Lowest permitted camera height.
    #[schemars(title = "Minimum Height", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub min_height: f32,
    /// Highest permitted camera height.
    #[schemars(title = "Maximum Height", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub max_height: f32,
    /// Zoom rate and smoothing.
    pub zoom_speed: ZoomSpeed,
    /// Terrain below this height never lifts the camera.
    #[schemars(title = "Offset Minimum Terrain Height", range(min = -50.0, max = 50.0), extend("step" = 0.5))]
    pub offset_min_terrain_height: f32,
    /// How far terrain must rise above the already-applied offset before a
    /// drained offset ramp restarts.
    #[schemars(skip)]
    pub offset_restart_threshold: f32,
    /// Near-minimum-height pivot behavior.
    pub pivot: PivotOptions,
    /// Terrain area kinds considered when sampling the height under the
    /// viewport center. Empty means every area.
    #[schemars(skip)]
    pub height_offset_terrain_filter: Vec<TerrainAreaKind>,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            use_fov: false,
            initial_height: 15.0,
            min_height: 5.0,
            max_height: 18.0,
            zoom_speed: ZoomSpeed::default(),
            offset_min_terrain_height: 0.0,
            offset_restart_threshold: 0.5,
            pivot: PivotOptions::default(),
            height_offset_terrain_filter: Vec::new(),
        }
    }
}

impl ZoomOptions {
    /// Check the numeric invariants. Terrain kinds are checked separately
    /// against the terrain service when the controller is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("initial_height", self.initial_height),
            ("min_height", self.min_height),
            ("max_height", self.max_height),
            ("zoom_speed.rate", self.zoom_speed.rate),
            ("zoom_speed.smoothing_factor", self.zoom_speed.smoothing_factor),
            ("offset_min_terrain_height", self.offset_min_terrain_height),
            ("offset_restart_threshold", self.offset_restart_threshold),
            ("pivot.range_before_min", self.pivot.range_before_min),
            ("pivot.target_angle", self.pivot.target_angle),
            ("pivot.backward_distance", self.pivot.backward_distance),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*field));
        }

        if !(self.min_height <= self.initial_height
            && self.initial_height <= self.max_height)
        {
            return Err(ConfigError::HeightBounds {
                min: self.min_height,
                initial: self.initial_height,
                max: self.max_height,
            });
        }

        let non_negative = [
            ("zoom_speed.rate", self.zoom_speed.rate),
            ("offset_restart_threshold", self.offset_restart_threshold),
            ("pivot.range_before_min", self.pivot.range_before_min),
            ("pivot.backward_distance", self.pivot.backward_distance),
        ];
        if let Some((field, _)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Negative(*field));
        }

        if !(0.0..=1.0).contains(&self.zoom_speed.smoothing_factor) {
            return Err(ConfigError::SmoothingOutOfRange(
                self.zoom_speed.smoothing_factor,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ZoomOptions::default().validate(), Ok(()));
    }

    #[test]
    fn initial_outside_bounds_is_rejected() {
        let opts = ZoomOptions {
            initial_height: 20.0,
            ..ZoomOptions::default()
        };
        assert_eq!(
            opts.validate(),
            Err(ConfigError::HeightBounds {
                min: 5.0,
                initial: 20.0,
                max: 18.0,
            })
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let opts = ZoomOptions {
            min_height: 10.0,
            max_height: 8.0,
            initial_height: 9.0,
            ..ZoomOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::HeightBounds { .. })
        ));
    }

    #[test]
    fn nan_is_rejected_before_bounds() {
        let opts = ZoomOptions {
            max_height: f32::NAN,
            ..ZoomOptions::default()
        };
        assert_eq!(opts.validate(), Err(ConfigError::NonFinite("max_height")));
    }

    #[test]
    fn negative_pivot_range_is_rejected() {
        let mut opts = ZoomOptions::default();
        opts.pivot.range_before_min = -1.0;
        assert_eq!(
            opts.validate(),
            Err(ConfigError::Negative("pivot.range_before_min"))
        );
    }

    #[test]
    fn smoothing_above_one_is_rejected() {
        let mut opts = ZoomOptions::default();
        opts.zoom_speed.smoothing_factor = 1.5;
        assert_eq!(opts.validate(), Err(ConfigError::SmoothingOutOfRange(1.5)));
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let opts = ZoomOptions {
            min_height: 10.0,
            initial_height: 10.0,
            max_height: 10.0,
            ..ZoomOptions::default()
        };
        assert_eq!(opts.validate(), Ok(()));
    }
}
