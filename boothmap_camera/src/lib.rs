// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothmap Camera: headless pan/zoom camera state for a floor-plan viewer.
//!
//! This crate provides the continuous-state half of the boothmap interaction
//! engine. It focuses on:
//! - Camera state (uniform scale + pan offset + anchor correction offset).
//! - Anchor-stable zooming: re-expressing the view transform about any screen
//!   point so the map point under a cursor or finger stays fixed across scale
//!   changes.
//! - Coordinate conversion between screen (device pixel) space and map space.
//! - Momentum: pan and zoom velocities with exponential per-frame decay that
//!   settles to exactly zero.
//! - Static floor-plan geometry helpers (visibility culling and booth lookup).
//!
//! It does **not** own any rendering surface or input device. Callers are
//! expected to:
//! - Paint booths themselves, reading the [`Camera`] snapshot for the current
//!   transform.
//! - Wire gesture events into camera mutations at a higher layer (see the
//!   `boothmap_controller` crate).
//! - Drive [`Camera::tick`] from their animation-frame callback while motion
//!   remains, and stop scheduling once it reports [`Motion::Settled`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use boothmap_camera::Camera;
//!
//! let mut camera = Camera::new();
//!
//! // Zoom in about a cursor position without moving the map point under it.
//! let cursor = Point::new(100.0, 100.0);
//! let under_cursor = camera.screen_to_map(cursor);
//! camera.anchor_to(cursor);
//! camera.set_scale(camera.scale() * 1.05);
//! let under_cursor_after = camera.screen_to_map(cursor);
//! assert!((under_cursor_after.x - under_cursor.x).abs() < 1e-9);
//! assert!((under_cursor_after.y - under_cursor.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The camera is a single-writer value: exactly one controller mutates it,
//!   and renderers only read snapshots. Nothing here is synchronized.
//! - Zoom is uniform and axis-aligned; rotation is intentionally left out.
//! - The scale is clamped into `[min_scale, max_scale]` at every write; a
//!   clamped write also zeroes the zoom momentum so the camera never bounces
//!   against its bounds.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod kinetics;
mod plan;

pub use camera::{Camera, CameraDebugInfo, MAX_SCALE, MIN_SCALE};
pub use kinetics::{Motion, SETTLE_EPSILON, accumulate, clamp_magnitude, decay_toward_zero};
pub use plan::{Booth, FloorPlan};
