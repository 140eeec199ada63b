// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum arithmetic shared by the camera tick and gesture handlers.

/// Velocity magnitude below which a damped value snaps to exactly zero.
///
/// Snapping is what lets the animation loop terminate: decay alone only
/// approaches zero asymptotically.
pub const SETTLE_EPSILON: f64 = 1e-3;

/// Whether the camera is still in motion after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// At least one velocity component is non-zero; schedule another frame.
    Moving,
    /// All velocities have settled to exactly zero.
    Settled,
}

impl Motion {
    /// Returns `true` while another animation frame is needed.
    #[must_use]
    pub fn is_moving(self) -> bool {
        self == Self::Moving
    }
}

/// Applies one step of exponential damping, snapping to zero below
/// [`SETTLE_EPSILON`].
#[must_use]
pub fn decay_toward_zero(velocity: f64, decay: f64) -> f64 {
    let damped = velocity * decay;
    if damped.abs() < SETTLE_EPSILON {
        0.0
    } else {
        damped
    }
}

/// Merges a fresh gesture velocity with momentum carried from before the
/// gesture started.
///
/// Same-direction values sum, so quick successive flicks (or repeated wheel
/// notches) build momentum. A reversal, or either value being zero, discards
/// the carried momentum and keeps only the fresh value.
#[must_use]
pub fn accumulate(fresh: f64, carried: f64) -> f64 {
    if fresh != 0.0 && carried != 0.0 && (fresh > 0.0) == (carried > 0.0) {
        carried + fresh
    } else {
        fresh
    }
}

/// Clamps a velocity into the symmetric range `[-limit, limit]`.
#[must_use]
pub fn clamp_magnitude(velocity: f64, limit: f64) -> f64 {
    velocity.clamp(-limit, limit)
}
