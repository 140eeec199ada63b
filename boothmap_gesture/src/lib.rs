// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothmap Gesture: normalized input samples and gesture-local state.
//!
//! This crate provides the discrete-event half of the boothmap interaction
//! engine. Each module handles one concern:
//!
//! - [`sample`]: [`GestureSample`](sample::GestureSample), the normalized
//!   event vocabulary every recognizer backend (touch, mouse, trackpad)
//!   reduces to.
//! - [`pan`]: [`PanTracker`](pan::PanTracker), the baseline snapshot a pan
//!   gesture measures its deltas and momentum against.
//! - [`pinch`]: [`PinchTracker`](pinch::PinchTracker), the scale snapshot a
//!   pinch gesture multiplies its ratio onto.
//!
//! ## Design Philosophy
//!
//! Each tracker is designed to be:
//!
//! - **Minimal and focused**: it holds exactly the values snapshotted when
//!   the gesture began, nothing derived.
//! - **Stateful but simple**: `start`/`end` lifecycle with an `is_active`
//!   query, no internal event interpretation.
//! - **Integration-friendly**: the controller decides what the snapshots
//!   mean; trackers never touch the camera.
//!
//! The crate does not assume any particular input backend. Anything that can
//! produce [`GestureSample`](sample::GestureSample) values — a touch gesture
//! library, raw pointer events, a test harness — can drive the engine.
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod pinch;
pub mod sample;
