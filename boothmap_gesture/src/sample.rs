// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized gesture event vocabulary.
//!
//! A [`GestureSample`] is one ephemeral input event in screen coordinates.
//! Recognizer backends are expected to have already classified raw pointer
//! traffic: the engine is agnostic to whether a pan came from a finger, a
//! mouse drag, or a trackpad.

use kurbo::{Point, Vec2};

/// One normalized input event, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSample {
    /// A wheel or trackpad scroll notch.
    ///
    /// `delta_y` carries only its sign's worth of meaning: positive scrolls
    /// zoom out, negative zoom in, matching browser wheel conventions.
    Wheel {
        /// Raw vertical scroll delta; only the sign is interpreted.
        delta_y: f64,
        /// Cursor position, used as the zoom anchor.
        center: Point,
    },
    /// A single tap or click.
    Tap {
        /// Tap position.
        center: Point,
    },
    /// A double tap, triggering the toggle zoom.
    DoubleTap {
        /// Tap position, used as the zoom anchor.
        center: Point,
    },
    /// A pan gesture began; the recognizer reports deltas relative to here.
    PanStart,
    /// The pointer moved during a pan.
    PanMove {
        /// Total displacement since the pan began.
        delta: Vec2,
    },
    /// The pan gesture ended.
    PanEnd {
        /// Total displacement since the pan began.
        delta: Vec2,
        /// Release velocity reported by the recognizer, in screen units.
        velocity: Vec2,
    },
    /// A two-finger pinch began.
    PinchStart,
    /// The pinch spread changed.
    PinchMove {
        /// Scale ratio relative to the finger spread at pinch start.
        ratio: f64,
        /// Midpoint between the two touches, used as the zoom anchor.
        center: Point,
    },
    /// The pinch gesture ended.
    PinchEnd {
        /// Final scale ratio relative to pinch start.
        ratio: f64,
        /// Gesture duration in milliseconds.
        elapsed_ms: f64,
        /// Final midpoint between the two touches.
        center: Point,
    },
    /// The viewport was resized; repaint without touching camera state.
    Resize,
}
