// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts to the world outside the interaction engine.

use boothmap_camera::Camera;

/// The surface that paints the floor plan.
///
/// The controller pushes a camera snapshot into the host after every state
/// change and once per animation frame while momentum is live. The host only
/// reads the snapshot; all mutation happens inside the controller.
pub trait RenderHost {
    /// Repaints the surface using the given camera transform.
    fn repaint(&mut self, camera: &Camera);
}

/// The surrounding application chrome (search bar, cards, navigation).
///
/// Single taps on the map toggle its visibility; the engine makes no other
/// outward calls.
pub trait ChromePresenter {
    /// Toggles the visibility of the surrounding UI.
    fn toggle_chrome(&mut self);
}
