// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::kinetics::{Motion, decay_toward_zero};

/// Default lower zoom bound.
pub const MIN_SCALE: f64 = 0.5;
/// Default upper zoom bound.
pub const MAX_SCALE: f64 = 4.0;

/// Pan/zoom camera over the floor-plan surface.
///
/// `Camera` tracks a uniform scale, a pan offset in unscaled map-space units,
/// and a secondary "outer" correction offset that re-expresses the transform
/// about whichever screen point was last used as a zoom anchor. It can be
/// used to:
/// - Convert points between screen (device pixel) and map coordinates.
/// - Zoom about an arbitrary anchor point without moving the map point under
///   it ([`Camera::anchor_to`]).
/// - Carry pan and zoom momentum across animation frames ([`Camera::tick`]).
///
/// The transform it models is
/// `screen(m) = offset + outer + scale · (m − offset)`: the map is scaled
/// about the map point `offset`, which is pinned at the screen point
/// `offset + outer`. Re-anchoring moves that pivot to a new screen point
/// without visually moving anything, which is what makes a subsequent scale
/// change anchor-stable.
#[derive(Clone, Debug)]
pub struct Camera {
    scale: f64,
    offset: Vec2,
    outer: Vec2,
    velocity: Vec2,
    scale_velocity: f64,
    zoom_toggle: bool,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates an identity camera.
    ///
    /// - Initial scale is `1.0`.
    /// - All offsets and velocities are zero.
    /// - Scale is clamped to the range [`MIN_SCALE`]`..`[`MAX_SCALE`] by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            outer: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scale_velocity: 0.0,
            zoom_toggle: false,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the pan offset in map-space units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the anchor correction offset in screen-space units.
    #[must_use]
    pub fn outer(&self) -> Vec2 {
        self.outer
    }

    /// Returns the current pan velocity in map-space units per tick.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Returns the current zoom velocity, applied multiplicatively per tick.
    #[must_use]
    pub fn scale_velocity(&self) -> f64 {
        self.scale_velocity
    }

    /// Returns the double-tap zoom direction flag.
    #[must_use]
    pub fn zoom_toggle(&self) -> bool {
        self.zoom_toggle
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`.
    /// The current scale is re-clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.scale);
    }

    /// Sets the scale factor, clamping it into the configured scale range.
    ///
    /// A write that gets clamped also zeroes the zoom momentum, so decay can
    /// never grind against the bounds. Non-finite requests are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if clamped != scale {
            self.scale_velocity = 0.0;
        }
        self.scale = clamped;
    }

    /// Sets the pan offset in map-space units.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Sets the pan velocity in map-space units per tick.
    ///
    /// Non-finite components are treated as zero.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = Vec2::new(finite_or_zero(velocity.x), finite_or_zero(velocity.y));
    }

    /// Sets the zoom velocity, treating non-finite values as zero.
    pub fn set_scale_velocity(&mut self, scale_velocity: f64) {
        self.scale_velocity = finite_or_zero(scale_velocity);
    }

    /// Flips the double-tap zoom direction, returning the direction for the
    /// tap being handled: `+1.0` to zoom in, `-1.0` to zoom back out.
    pub fn flip_zoom_toggle(&mut self) -> f64 {
        let direction = if self.zoom_toggle { -1.0 } else { 1.0 };
        self.zoom_toggle = !self.zoom_toggle;
        direction
    }

    /// Re-expresses the transform about the given screen point.
    ///
    /// The visible picture does not change, but after this call the map point
    /// under `anchor` stays fixed on screen across any subsequent
    /// [`Camera::set_scale`], which is the core correctness property of
    /// anchor-stable zooming.
    pub fn anchor_to(&mut self, anchor: Point) {
        let delta = Vec2::new(
            (anchor.x - self.offset.x - self.outer.x) / self.scale,
            (anchor.y - self.offset.y - self.outer.y) / self.scale,
        );
        self.offset += delta;
        self.outer += delta * (self.scale - 1.0);
    }

    /// Converts a screen-space point into map coordinates.
    #[must_use]
    pub fn screen_to_map(&self, pt: Point) -> Point {
        Point::new(
            self.offset.x + (pt.x - self.offset.x - self.outer.x) / self.scale,
            self.offset.y + (pt.y - self.offset.y - self.outer.y) / self.scale,
        )
    }

    /// Converts a map-space point into screen coordinates.
    #[must_use]
    pub fn map_to_screen(&self, pt: Point) -> Point {
        Point::new(
            self.offset.x + self.outer.x + self.scale * (pt.x - self.offset.x),
            self.offset.y + self.outer.y + self.scale * (pt.y - self.offset.y),
        )
    }

    /// Returns the map-space rectangle visible through the given screen rect.
    ///
    /// Useful for culling booths before painting.
    #[must_use]
    pub fn visible_map_rect(&self, view_rect: Rect) -> Rect {
        // The transform is axis-aligned with positive scale, so converting
        // the two extreme corners is sufficient.
        let p0 = self.screen_to_map(Point::new(view_rect.x0, view_rect.y0));
        let p1 = self.screen_to_map(Point::new(view_rect.x1, view_rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Returns `true` once every velocity component is exactly zero.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.velocity == Vec2::ZERO && self.scale_velocity == 0.0
    }

    /// Advances momentum by one animation frame.
    ///
    /// Applies the pan velocity to the offset and the zoom velocity to the
    /// scale (multiplicatively, through the clamping setter), then damps all
    /// velocities by `decay`, snapping each to exactly zero below
    /// [`crate::SETTLE_EPSILON`]. Returns [`Motion::Settled`] once nothing
    /// moves any more, so the host can stop scheduling frames.
    pub fn tick(&mut self, decay: f64) -> Motion {
        if self.is_settled() {
            return Motion::Settled;
        }

        self.offset += self.velocity;
        if self.scale_velocity != 0.0 {
            self.set_scale(self.scale * (1.0 + self.scale_velocity));
        }

        self.velocity = Vec2::new(
            decay_toward_zero(self.velocity.x, decay),
            decay_toward_zero(self.velocity.y, decay),
        );
        self.scale_velocity = decay_toward_zero(self.scale_velocity, decay);

        if self.is_settled() {
            Motion::Settled
        } else {
            Motion::Moving
        }
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            scale: self.scale,
            offset: self.offset,
            outer: self.outer,
            velocity: self.velocity,
            scale_velocity: self.scale_velocity,
            zoom_toggle: self.zoom_toggle,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current uniform scale factor.
    pub scale: f64,
    /// Pan offset in map-space units.
    pub offset: Vec2,
    /// Anchor correction offset in screen-space units.
    pub outer: Vec2,
    /// Pan velocity in map-space units per tick.
    pub velocity: Vec2,
    /// Zoom velocity, applied multiplicatively per tick.
    pub scale_velocity: f64,
    /// Double-tap zoom direction flag.
    pub zoom_toggle: bool,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Maximum scale factor.
    pub max_scale: f64,
}
