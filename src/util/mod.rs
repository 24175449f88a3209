//! Shared utilities for the zoom rig.

pub mod math;
