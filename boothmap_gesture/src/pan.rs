// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan baseline tracker: the offset and momentum snapshot a pan gesture
//! measures against.
//!
//! ## Usage
//!
//! 1) When the recognizer reports a pan start, call [`PanTracker::start`]
//!    with the camera's current offset and velocity.
//! 2) While the pan is active, compute new offsets against
//!    [`PanTracker::start_offset`].
//! 3) On pan end, merge the release velocity with
//!    [`PanTracker::carried_velocity`] and call [`PanTracker::end`].
//!
//! Snapshotting the live velocity at pan start is also what cancels any
//! in-flight pan momentum: subsequent moves overwrite the camera's velocity,
//! and the carried value only survives if the release continues in the same
//! direction.

use kurbo::Vec2;

/// Tracks the baseline state of an active pan gesture.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    baseline: Option<Baseline>,
}

#[derive(Debug, Clone, Copy)]
struct Baseline {
    start_offset: Vec2,
    carried_velocity: Vec2,
}

impl PanTracker {
    /// Starts tracking a pan from the camera's current offset and velocity.
    pub fn start(&mut self, offset: Vec2, velocity: Vec2) {
        self.baseline = Some(Baseline {
            start_offset: offset,
            carried_velocity: velocity,
        });
    }

    /// Returns the offset snapshotted at pan start, if a pan is active.
    #[must_use]
    pub fn start_offset(&self) -> Option<Vec2> {
        self.baseline.map(|b| b.start_offset)
    }

    /// Returns the pan velocity the camera carried when the pan started.
    #[must_use]
    pub fn carried_velocity(&self) -> Option<Vec2> {
        self.baseline.map(|b| b.carried_velocity)
    }

    /// Ends the current pan and resets state.
    pub fn end(&mut self) {
        self.baseline = None;
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }
}
