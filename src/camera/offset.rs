//! Terrain-height offset compensation.
//!
//! While the terrain under the viewport center is at or above the
//! configured threshold the camera is lifted along its view axis by the excess, one
//! `dt * rate` step per frame. When the terrain falls back below the
//! threshold the lift that was actually applied is drained again.

/// State of the offset ramp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OffsetRamp {
    /// No offset applied and nothing left to drain.
    #[default]
    Idle,
    /// Compensating for elevated terrain. `remaining` is the lift still to
    /// apply; `accumulated` is the total lift this ramp targets.
    Raising {
        /// Lift still to apply.
        remaining: f32,
        /// Total lift targeted since the ramp started.
        accumulated: f32,
    },
    /// Terrain dropped below the threshold; removing the applied lift.
    Draining {
        /// Lift still to remove.
        remaining: f32,
    },
}

impl OffsetRamp {
    /// Whether the ramp is compensating for elevated terrain.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Raising { .. })
    }

    /// Distance left to move in the current direction.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        match *self {
            Self::Idle => 0.0,
            Self::Raising { remaining, .. } | Self::Draining { remaining } => {
                remaining
            }
        }
    }

    /// Lift the active ramp targets (0 unless raising).
    #[must_use]
    pub fn accumulated(&self) -> f32 {
        match *self {
            Self::Raising { accumulated, .. } => accumulated,
            Self::Idle | Self::Draining { .. } => 0.0,
        }
    }

    /// React to the terrain excess sampled this frame and advance one step.
    ///
    /// `excess` is the terrain height above the threshold (zero when the
    /// terrain sits exactly on it), or `None` when the terrain is below it
    /// or was not hit. A zero excess arms the ramp without lifting, so
    /// later bumps are measured against the restart threshold. Returns the signed
    /// lift to apply this frame: positive raises the camera, negative
    /// lowers it.
    pub fn advance(
        &mut self,
        excess: Option<f32>,
        restart_threshold: f32,
        step: f32,
    ) -> f32 {
        match excess {
            Some(excess) => self.retarget(excess, restart_threshold),
            None => self.reverse(),
        }

        match self {
            Self::Raising { remaining, .. } if *remaining > 0.0 => {
                let delta = step.min(*remaining);
                *remaining -= delta;
                delta
            }
            Self::Draining { remaining } => {
                let delta = step.min(*remaining);
                *remaining -= delta;
                if *remaining <= 0.0 {
                    *self = Self::Idle;
                }
                -delta
            }
            _ => 0.0,
        }
    }

    fn retarget(&mut self, excess: f32, restart_threshold: f32) {
        let restart = match *self {
            Self::Idle | Self::Draining { .. } => true,
            Self::Raising {
                remaining,
                accumulated,
            } => remaining <= 0.0 && excess - accumulated > restart_threshold,
        };
        if !restart {
            return;
        }

        let accumulated = self.accumulated();
        let remaining = excess - accumulated;
        log::debug!(
            "terrain offset ramp: raising by {remaining:.2} \
             (excess {excess:.2}, already {accumulated:.2})"
        );
        *self = Self::Raising {
            remaining,
            accumulated: accumulated + remaining,
        };
    }

    fn reverse(&mut self) {
        if let Self::Raising {
            remaining,
            accumulated,
        } = *self
        {
            let applied = accumulated - remaining;
            log::debug!("terrain offset ramp: draining {applied:.2}");
            *self = if applied > 0.0 {
                Self::Draining { remaining: applied }
            } else {
                Self::Idle
            };
        }
    }
}
