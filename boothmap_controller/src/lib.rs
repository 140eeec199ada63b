// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothmap Controller: the gesture-to-camera pipeline of the floor-plan
//! viewer.
//!
//! ## Overview
//!
//! This crate turns normalized [`GestureSample`] events into
//! [`Camera`](boothmap_camera::Camera) updates. It owns the camera (single
//! writer), the gesture baseline trackers, and the momentum rules:
//!
//! - Wheel notches zoom by a fixed step about the cursor and build zoom
//!   momentum on repeated same-direction scrolling, clamped to a maximum.
//! - Double taps alternate between zooming in and back out about the tap
//!   point, with a full-momentum impulse for a visible eased snap.
//! - Pans drag the offset in map-space units; release velocity becomes pan
//!   momentum, summing across quick same-direction flicks.
//! - Pinches scale about the finger midpoint; release speed becomes zoom
//!   momentum.
//! - Every zoom re-anchors first, so the map point under the cursor or
//!   fingers never jumps.
//!
//! ## The animation loop
//!
//! Momentum is driven cooperatively by the host's frame callback. Call
//! [`Controller::on_frame`] from each animation frame; it advances the
//! camera, asks the [`RenderHost`] to repaint, and returns
//! [`Motion`](boothmap_camera::Motion) so the host knows whether to schedule
//! another frame. The loop is self-terminating: velocities decay
//! exponentially and snap to exactly zero, and a settled frame is a no-op.
//! Gesture starts cancel in-flight momentum for their axis by snapshotting
//! and overwriting the live velocity, so decay and a finger never fight.
//!
//! ## Concurrency
//!
//! Everything here assumes a single-threaded, event-driven host: gesture
//! callbacks and the frame callback never overlap, so no synchronization
//! exists. The render host reads camera snapshots passed by reference and
//! must not retain them.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod host;

pub use boothmap_gesture::sample::GestureSample;
pub use controller::{
    Controller, DECAY, MAX_SCALE_VELOCITY, SCALE_STEP, VELOCITY_MULTIPLIER,
};
pub use host::{ChromePresenter, RenderHost};
