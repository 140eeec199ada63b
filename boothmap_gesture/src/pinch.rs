// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch baseline tracker: the scale and zoom-momentum snapshot a pinch
//! gesture multiplies its ratio onto.

/// Tracks the baseline state of an active two-finger pinch.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchTracker {
    baseline: Option<Baseline>,
}

#[derive(Debug, Clone, Copy)]
struct Baseline {
    start_scale: f64,
    carried_scale_velocity: f64,
}

impl PinchTracker {
    /// Starts tracking a pinch from the camera's current scale and zoom
    /// velocity.
    pub fn start(&mut self, scale: f64, scale_velocity: f64) {
        self.baseline = Some(Baseline {
            start_scale: scale,
            carried_scale_velocity: scale_velocity,
        });
    }

    /// Returns the scale snapshotted at pinch start, if a pinch is active.
    #[must_use]
    pub fn start_scale(&self) -> Option<f64> {
        self.baseline.map(|b| b.start_scale)
    }

    /// Returns the zoom velocity the camera carried when the pinch started.
    #[must_use]
    pub fn carried_scale_velocity(&self) -> Option<f64> {
        self.baseline.map(|b| b.carried_scale_velocity)
    }

    /// Ends the current pinch and resets state.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a pinch gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }
}
