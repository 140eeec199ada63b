// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use boothmap_camera::{Camera, Motion, accumulate, clamp_magnitude};
use boothmap_gesture::{pan::PanTracker, pinch::PinchTracker, sample::GestureSample};

use crate::host::{ChromePresenter, RenderHost};

/// Relative zoom change per wheel notch.
pub const SCALE_STEP: f64 = 0.05;
/// Converts recognizer release velocity into map-space units per tick.
pub const VELOCITY_MULTIPLIER: f64 = 20.0;
/// Zoom momentum ceiling.
pub const MAX_SCALE_VELOCITY: f64 = 3.0;
/// Per-frame exponential damping applied to all velocities.
pub const DECAY: f64 = 0.9;

/// The viewport controller: converts gesture samples into camera updates.
///
/// Owns the [`Camera`] exclusively. The render host receives read-only
/// snapshots after every update; the presenter is only notified of single
/// taps. See the crate docs for the interaction rules.
#[derive(Debug)]
pub struct Controller<H, P> {
    camera: Camera,
    pan: PanTracker,
    pinch: PinchTracker,
    host: H,
    presenter: P,
}

impl<H: RenderHost, P: ChromePresenter> Controller<H, P> {
    /// Creates a controller over an identity camera.
    pub fn new(host: H, presenter: P) -> Self {
        Self {
            camera: Camera::new(),
            pan: PanTracker::default(),
            pinch: PinchTracker::default(),
            host,
            presenter,
        }
    }

    /// Returns a read-only snapshot of the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the render host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Dispatches one normalized gesture sample.
    pub fn apply(&mut self, sample: GestureSample) {
        match sample {
            GestureSample::Wheel { delta_y, center } => self.on_wheel(delta_y, center),
            GestureSample::Tap { center } => self.on_single_tap(center),
            GestureSample::DoubleTap { center } => self.on_double_tap(center),
            GestureSample::PanStart => self.on_pan_start(),
            GestureSample::PanMove { delta } => self.on_pan_move(delta),
            GestureSample::PanEnd { delta, velocity } => self.on_pan_end(delta, velocity),
            GestureSample::PinchStart => self.on_pinch_start(),
            GestureSample::PinchMove { ratio, center } => self.on_pinch_move(ratio, center),
            GestureSample::PinchEnd {
                ratio,
                elapsed_ms,
                center,
            } => self.on_pinch_end(ratio, elapsed_ms, center),
            GestureSample::Resize => self.on_resize(),
        }
    }

    /// Zooms by one fixed step about the cursor, building zoom momentum on
    /// repeated same-direction notches.
    pub fn on_wheel(&mut self, delta_y: f64, center: Point) {
        let direction = -sign(delta_y);
        let scale = self.camera.scale() * (1.0 + SCALE_STEP * direction);

        // Per-notch impulse; same-direction notches stack up to the ceiling,
        // a reversal starts over from the fresh impulse.
        let impulse = (MAX_SCALE_VELOCITY / 3.0) * direction;
        let velocity = clamp_magnitude(
            accumulate(impulse, self.camera.scale_velocity()),
            MAX_SCALE_VELOCITY,
        );

        self.camera.anchor_to(center);
        self.camera.set_scale_velocity(velocity);
        self.camera.set_scale(scale);
        self.host.repaint(&self.camera);
    }

    /// Toggles the surrounding chrome and re-anchors at the tap point.
    ///
    /// Re-anchoring with no scale change is deliberate: it swallows any tiny
    /// drift from event coordinate rounding without moving the picture.
    pub fn on_single_tap(&mut self, center: Point) {
        self.presenter.toggle_chrome();
        self.camera.anchor_to(center);
        self.host.repaint(&self.camera);
    }

    /// Alternates between zooming in and back out about the tap point.
    pub fn on_double_tap(&mut self, center: Point) {
        let direction = self.camera.flip_zoom_toggle();
        let scale = self.camera.scale() * (1.0 + 4.0 * SCALE_STEP * direction);

        self.camera.anchor_to(center);
        self.camera.set_scale_velocity(MAX_SCALE_VELOCITY * direction);
        self.camera.set_scale(scale);
        self.host.repaint(&self.camera);
    }

    /// Begins a pan: snapshots the offset/momentum baseline and stops any
    /// in-flight pan coasting.
    pub fn on_pan_start(&mut self) {
        self.pan.start(self.camera.offset(), self.camera.velocity());
        self.camera.set_velocity(Vec2::ZERO);
        self.host.repaint(&self.camera);
    }

    /// Drags the offset by the gesture's total displacement.
    ///
    /// Dividing by the scale keeps the on-screen drag distance consistent at
    /// every zoom level.
    pub fn on_pan_move(&mut self, delta: Vec2) {
        let Some(start) = self.pan.start_offset() else {
            return;
        };
        self.camera.set_offset(start - delta / self.camera.scale());
        self.camera.set_velocity(Vec2::ZERO);
        self.host.repaint(&self.camera);
    }

    /// Ends a pan, converting the release velocity into pan momentum.
    ///
    /// A release continuing in the direction of momentum carried from before
    /// the pan sums with it; a reversal keeps only the fresh velocity. Pan
    /// momentum has no ceiling.
    pub fn on_pan_end(&mut self, delta: Vec2, gesture_velocity: Vec2) {
        let Some(start) = self.pan.start_offset() else {
            return;
        };
        let carried = self.pan.carried_velocity().unwrap_or(Vec2::ZERO);
        let scale = self.camera.scale();
        let fresh = gesture_velocity * VELOCITY_MULTIPLIER / scale;

        self.camera.set_offset(start - delta / scale);
        self.camera.set_velocity(Vec2::new(
            accumulate(fresh.x, carried.x),
            accumulate(fresh.y, carried.y),
        ));
        self.pan.end();
        self.host.repaint(&self.camera);
    }

    /// Begins a pinch: snapshots the scale/momentum baseline and stops any
    /// in-flight zoom coasting.
    pub fn on_pinch_start(&mut self) {
        self.pinch
            .start(self.camera.scale(), self.camera.scale_velocity());
        self.camera.set_scale_velocity(0.0);
        self.host.repaint(&self.camera);
    }

    /// Scales about the pinch midpoint by the ratio since pinch start.
    pub fn on_pinch_move(&mut self, ratio: f64, center: Point) {
        let Some(start_scale) = self.pinch.start_scale() else {
            return;
        };
        if !(ratio > 0.0) || !ratio.is_finite() {
            return;
        }
        self.camera.anchor_to(center);
        self.camera.set_scale_velocity(0.0);
        self.camera.set_scale(start_scale * ratio);
        self.host.repaint(&self.camera);
    }

    /// Ends a pinch, converting the spread rate into zoom momentum.
    ///
    /// A degenerate duration (`elapsed_ms <= 0`) yields zero momentum rather
    /// than dividing toward infinity. Accumulated momentum is clamped to the
    /// same ceiling as wheel momentum.
    pub fn on_pinch_end(&mut self, ratio: f64, elapsed_ms: f64, center: Point) {
        let Some(start_scale) = self.pinch.start_scale() else {
            return;
        };
        let carried = self.pinch.carried_scale_velocity().unwrap_or(0.0);

        let fresh = if elapsed_ms > 0.0 {
            (ratio - 1.0) / (elapsed_ms / 100.0)
        } else {
            0.0
        };
        let velocity = clamp_magnitude(accumulate(fresh, carried), MAX_SCALE_VELOCITY);

        self.camera.anchor_to(center);
        self.camera.set_scale_velocity(velocity);
        if ratio > 0.0 && ratio.is_finite() {
            self.camera.set_scale(start_scale * ratio);
        }
        self.pinch.end();
        self.host.repaint(&self.camera);
    }

    /// Repaints after a viewport resize. Camera state is untouched.
    pub fn on_resize(&mut self) {
        self.host.repaint(&self.camera);
    }

    /// Advances momentum by one animation frame and repaints while moving.
    ///
    /// Returns [`Motion::Settled`] once every velocity is exactly zero; the
    /// host should keep scheduling frames only while this returns
    /// [`Motion::Moving`].
    pub fn on_frame(&mut self) -> Motion {
        if self.camera.is_settled() {
            return Motion::Settled;
        }
        let motion = self.camera.tick(DECAY);
        self.host.repaint(&self.camera);
        motion
    }
}

/// Sign with a zero branch, unlike `f64::signum` which maps `0.0` to `1.0`.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use boothmap_camera::Motion;

    use super::{Controller, MAX_SCALE_VELOCITY, SCALE_STEP};
    use crate::host::{ChromePresenter, RenderHost};

    #[derive(Default)]
    struct CountingHost {
        repaints: usize,
    }

    impl RenderHost for CountingHost {
        fn repaint(&mut self, _camera: &boothmap_camera::Camera) {
            self.repaints += 1;
        }
    }

    #[derive(Default)]
    struct CountingPresenter {
        toggles: usize,
    }

    impl ChromePresenter for CountingPresenter {
        fn toggle_chrome(&mut self) {
            self.toggles += 1;
        }
    }

    fn controller() -> Controller<CountingHost, CountingPresenter> {
        Controller::new(CountingHost::default(), CountingPresenter::default())
    }

    #[test]
    fn wheel_zoom_in_worked_example() {
        let mut c = controller();
        c.on_wheel(-120.0, Point::new(100.0, 100.0));

        let camera = c.camera();
        assert!((camera.scale() - 1.05).abs() < 1e-12);
        assert_eq!(camera.offset(), Vec2::new(100.0, 100.0));
        assert_eq!(camera.outer(), Vec2::ZERO);
        assert_eq!(camera.scale_velocity(), MAX_SCALE_VELOCITY / 3.0);
        assert_eq!(c.host().repaints, 1);
    }

    #[test]
    fn wheel_momentum_is_non_decreasing_then_clamped() {
        let mut c = controller();
        let mut last = 0.0;
        for _ in 0..6 {
            c.on_wheel(-120.0, Point::new(50.0, 50.0));
            let v = c.camera().scale_velocity();
            assert!(v >= last, "same-direction wheel momentum decreased");
            assert!(v <= MAX_SCALE_VELOCITY);
            last = v;
        }
        assert_eq!(last, MAX_SCALE_VELOCITY);
    }

    #[test]
    fn wheel_reversal_restarts_momentum_from_the_fresh_impulse() {
        let mut c = controller();
        c.on_wheel(-120.0, Point::new(0.0, 0.0));
        c.on_wheel(-120.0, Point::new(0.0, 0.0));
        assert_eq!(c.camera().scale_velocity(), 2.0);

        c.on_wheel(120.0, Point::new(0.0, 0.0));
        assert_eq!(c.camera().scale_velocity(), -1.0);
    }

    #[test]
    fn wheel_anchor_keeps_cursor_point_fixed() {
        let mut c = controller();
        // Put the camera in a non-trivial pose first.
        c.on_wheel(-120.0, Point::new(310.0, 95.0));
        c.on_pan_start();
        c.on_pan_move(Vec2::new(-40.0, 25.0));
        c.on_pan_end(Vec2::new(-40.0, 25.0), Vec2::ZERO);

        let cursor = Point::new(210.0, 160.0);
        let before = c.camera().screen_to_map(cursor);
        c.on_wheel(-120.0, cursor);
        let after = c.camera().screen_to_map(cursor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn single_tap_toggles_chrome_without_moving_the_picture() {
        let mut c = controller();
        c.on_wheel(-120.0, Point::new(70.0, 40.0));
        let probe = Point::new(5.0, 5.0);
        let before = c.camera().map_to_screen(probe);
        let scale_before = c.camera().scale();

        c.on_single_tap(Point::new(400.0, 300.0));

        assert_eq!(c.presenter().toggles, 1);
        assert_eq!(c.camera().scale(), scale_before);
        let after = c.camera().map_to_screen(probe);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn double_tap_alternates_and_returns_near_original_scale() {
        let mut c = controller();
        let tap = Point::new(120.0, 80.0);

        c.on_double_tap(tap);
        assert!(c.camera().zoom_toggle());
        assert!((c.camera().scale() - (1.0 + 4.0 * SCALE_STEP)).abs() < 1e-12);
        assert_eq!(c.camera().scale_velocity(), MAX_SCALE_VELOCITY);

        c.on_double_tap(tap);
        assert!(!c.camera().zoom_toggle());
        assert_eq!(c.camera().scale_velocity(), -MAX_SCALE_VELOCITY);
        // 1.2 * 0.8 is not exactly 1; assert convergence, not equality.
        assert!((c.camera().scale() - 1.0).abs() < 0.05);
    }

    #[test]
    fn pan_drags_offset_scaled_by_zoom() {
        let mut c = controller();
        c.on_pan_start();
        c.on_pan_move(Vec2::new(10.0, 6.0));
        assert_eq!(c.camera().offset(), Vec2::new(-10.0, -6.0));

        c.on_pan_end(Vec2::new(10.0, 6.0), Vec2::ZERO);
        assert_eq!(c.camera().offset(), Vec2::new(-10.0, -6.0));
        assert_eq!(c.camera().velocity(), Vec2::ZERO);
    }

    #[test]
    fn pan_release_velocity_is_scaled_into_map_space() {
        let mut c = controller();
        c.on_pan_start();
        c.on_pan_end(Vec2::ZERO, Vec2::new(0.5, -0.25));
        assert_eq!(c.camera().velocity(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn successive_same_direction_flicks_build_momentum() {
        let mut c = controller();
        c.on_pan_start();
        c.on_pan_end(Vec2::ZERO, Vec2::new(0.5, 0.0));
        assert_eq!(c.camera().velocity().x, 10.0);

        c.on_pan_start();
        c.on_pan_end(Vec2::ZERO, Vec2::new(0.5, 0.0));
        assert_eq!(c.camera().velocity().x, 20.0);
    }

    #[test]
    fn a_reversed_flick_kills_prior_momentum() {
        let mut c = controller();
        c.on_pan_start();
        c.on_pan_end(Vec2::ZERO, Vec2::new(0.5, 0.0));

        c.on_pan_start();
        c.on_pan_end(Vec2::ZERO, Vec2::new(-0.5, 0.0));
        assert_eq!(c.camera().velocity().x, -10.0);
    }

    #[test]
    fn pan_start_stops_in_flight_coasting() {
        let mut c = controller();
        c.on_pan_start();
        c.on_pan_end(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert!(c.camera().velocity() != Vec2::ZERO);

        c.on_pan_start();
        assert_eq!(c.camera().velocity(), Vec2::ZERO);
    }

    #[test]
    fn pan_events_without_a_start_are_ignored() {
        let mut c = controller();
        c.on_pan_move(Vec2::new(100.0, 100.0));
        c.on_pan_end(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        assert_eq!(c.camera().offset(), Vec2::ZERO);
        assert_eq!(c.camera().velocity(), Vec2::ZERO);
    }

    #[test]
    fn pinch_scales_about_the_midpoint() {
        let mut c = controller();
        let center = Point::new(200.0, 150.0);
        let before = c.camera().screen_to_map(center);

        c.on_pinch_start();
        c.on_pinch_move(1.5, center);
        assert!((c.camera().scale() - 1.5).abs() < 1e-12);

        let after = c.camera().screen_to_map(center);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn pinch_ratio_multiplies_the_start_scale_not_the_live_scale() {
        let mut c = controller();
        c.on_pinch_start();
        c.on_pinch_move(1.2, Point::new(10.0, 10.0));
        c.on_pinch_move(1.5, Point::new(10.0, 10.0));
        // 1.0 * 1.5, not 1.2 * 1.5.
        assert!((c.camera().scale() - 1.5).abs() < 1e-12);
        c.on_pinch_end(1.5, 100.0, Point::new(10.0, 10.0));
        assert!((c.camera().scale() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn pinch_end_converts_spread_rate_into_zoom_momentum() {
        let mut c = controller();
        c.on_pinch_start();
        // ratio 1.2 over 200ms: (0.2) / 2 = 0.1.
        c.on_pinch_end(1.2, 200.0, Point::new(0.0, 0.0));
        assert!((c.camera().scale_velocity() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn degenerate_pinch_duration_yields_zero_momentum() {
        let mut c = controller();
        c.on_pinch_start();
        c.on_pinch_end(1.5, 0.0, Point::new(0.0, 0.0));
        let v = c.camera().scale_velocity();
        assert_eq!(v, 0.0);
        assert!(v.is_finite());

        c.on_pinch_start();
        c.on_pinch_end(1.5, -5.0, Point::new(0.0, 0.0));
        assert_eq!(c.camera().scale_velocity(), 0.0);
    }

    #[test]
    fn violent_pinch_momentum_is_clamped() {
        let mut c = controller();
        c.on_pinch_start();
        // ratio 1.5 over 10ms: 0.5 / 0.1 = 5.0, above the ceiling.
        c.on_pinch_end(1.5, 10.0, Point::new(0.0, 0.0));
        assert_eq!(c.camera().scale_velocity(), MAX_SCALE_VELOCITY);
    }

    #[test]
    fn non_positive_pinch_ratio_does_not_corrupt_the_scale() {
        let mut c = controller();
        c.on_pinch_start();
        c.on_pinch_move(0.0, Point::new(0.0, 0.0));
        c.on_pinch_move(-1.0, Point::new(0.0, 0.0));
        assert_eq!(c.camera().scale(), 1.0);
        c.on_pinch_end(f64::NAN, 100.0, Point::new(0.0, 0.0));
        assert_eq!(c.camera().scale(), 1.0);
        assert!(c.camera().scale_velocity().is_finite());
    }

    #[test]
    fn scale_stays_in_bounds_through_any_frame_sequence() {
        let mut c = controller();
        for _ in 0..10 {
            c.on_wheel(-120.0, Point::new(30.0, 30.0));
        }
        let mut frames = 0;
        while c.on_frame() == Motion::Moving {
            let s = c.camera().scale();
            assert!(s >= 0.5 && s <= 4.0, "scale escaped its bounds");
            frames += 1;
            assert!(frames < 1000, "momentum failed to settle");
        }
        assert!(c.camera().is_settled());
    }

    #[test]
    fn settled_frames_do_not_repaint() {
        let mut c = controller();
        assert_eq!(c.on_frame(), Motion::Settled);
        assert_eq!(c.host().repaints, 0);
    }

    #[test]
    fn resize_repaints_without_mutating_state() {
        let mut c = controller();
        c.on_wheel(-120.0, Point::new(25.0, 75.0));
        let before = c.camera().debug_info();
        let repaints = c.host().repaints;

        c.on_resize();

        let after = c.camera().debug_info();
        assert_eq!(c.host().repaints, repaints + 1);
        assert_eq!(after.scale, before.scale);
        assert_eq!(after.offset, before.offset);
        assert_eq!(after.outer, before.outer);
        assert_eq!(after.scale_velocity, before.scale_velocity);
    }

    #[test]
    fn apply_dispatches_every_sample_kind() {
        use boothmap_gesture::sample::GestureSample;

        let mut c = controller();
        c.apply(GestureSample::Wheel {
            delta_y: -120.0,
            center: Point::new(10.0, 10.0),
        });
        c.apply(GestureSample::Tap {
            center: Point::new(10.0, 10.0),
        });
        c.apply(GestureSample::DoubleTap {
            center: Point::new(10.0, 10.0),
        });
        c.apply(GestureSample::PanStart);
        c.apply(GestureSample::PanMove {
            delta: Vec2::new(2.0, 2.0),
        });
        c.apply(GestureSample::PanEnd {
            delta: Vec2::new(2.0, 2.0),
            velocity: Vec2::ZERO,
        });
        c.apply(GestureSample::PinchStart);
        c.apply(GestureSample::PinchMove {
            ratio: 1.1,
            center: Point::new(10.0, 10.0),
        });
        c.apply(GestureSample::PinchEnd {
            ratio: 1.1,
            elapsed_ms: 80.0,
            center: Point::new(10.0, 10.0),
        });
        c.apply(GestureSample::Resize);

        assert_eq!(c.presenter().toggles, 1);
        assert_eq!(c.host().repaints, 10);
        assert!(c.camera().scale() >= 0.5 && c.camera().scale() <= 4.0);
    }
}
