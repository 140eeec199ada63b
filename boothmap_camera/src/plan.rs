// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static floor-plan geometry: booth rectangles, visibility culling, and hit
//! lookup.
//!
//! The plan is read-only data. It knows nothing about the camera beyond
//! operating on map-space coordinates; hosts convert screen points with
//! [`crate::Camera::screen_to_map`] before asking which booth was tapped.

use kurbo::{Point, Rect};

/// One booth cluster in the floor plan, axis-aligned in map space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Booth<'a> {
    /// Display label, e.g. an aisle/cluster name.
    pub label: &'a str,
    /// Bounds in map-space units.
    pub bounds: Rect,
}

/// A borrowed set of booths making up the floor plan.
#[derive(Clone, Copy, Debug)]
pub struct FloorPlan<'a> {
    booths: &'a [Booth<'a>],
}

impl<'a> FloorPlan<'a> {
    /// Creates a plan over the given booths.
    #[must_use]
    pub fn new(booths: &'a [Booth<'a>]) -> Self {
        Self { booths }
    }

    /// Returns all booths in the plan.
    #[must_use]
    pub fn booths(&self) -> &'a [Booth<'a>] {
        self.booths
    }

    /// Returns the union of all booth bounds, or `None` for an empty plan.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self.booths.iter();
        let first = iter.next()?.bounds;
        Some(iter.fold(first, |acc, b| acc.union(b.bounds)))
    }

    /// Returns the topmost booth containing the given map-space point, if any.
    ///
    /// Later entries are treated as painted on top of earlier ones, so the
    /// last match wins.
    #[must_use]
    pub fn booth_at(&self, map_pt: Point) -> Option<&'a Booth<'a>> {
        self.booths.iter().rev().find(|b| b.bounds.contains(map_pt))
    }

    /// Returns the booths intersecting the given visible map-space rect.
    ///
    /// Intended for culling before painting, e.g. with
    /// [`crate::Camera::visible_map_rect`].
    pub fn visible(&self, visible_rect: Rect) -> impl Iterator<Item = &'a Booth<'a>> {
        self.booths
            .iter()
            .filter(move |b| b.bounds.intersect(visible_rect).area() > 0.0)
    }
}
