//! The primary [`Component`] of the controller, [`OrbitCam`].

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::{DVec2, Vec3};
use bevy_reflect::prelude::*;
use bevy_transform::prelude::*;
use bevy_window::RequestRedraw;

use super::{
    damping,
    inputs::{
        apply_drag, north_up_above_globe_zoom, DragSession, DragTuning, InteractionMode,
        ScreenRect,
    },
    notify::{ListenerId, Listeners, Notifier, OrbitCamEvent, OrbitCamSignal},
    pose::{PartialPose, Pose},
    projections::{NavigationStyle, Placement, ProjectionPolicy},
    zoom::{wheel_zoom_delta, WheelDeltaMode, ZoomLimits},
};

/// Mean earth radius in kilometers, the default sphere radius.
pub const EARTH_RADIUS: f64 = 6371.0;

/// Construction options for an [`OrbitCam`]. Every field is optional and falls back to the
/// default pose and limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct OrbitCamOptions {
    /// Radius of the sphere being orbited. Defaults to [`EARTH_RADIUS`].
    pub radius: Option<f64>,
    /// Initial angular position, see [`Pose::coord`]. Defaults to `(0, π/2)`.
    pub coord: Option<DVec2>,
    /// Initial zoom level. Defaults to 10.
    pub zoom: Option<f64>,
    /// Initial pitch in degrees. Defaults to 0.
    pub pitch: Option<f64>,
    /// Initial bearing in radians. Defaults to 0.
    pub bearing: Option<f64>,
    /// Closest zoom level. Defaults to 1.
    pub min_zoom: Option<f64>,
    /// Furthest zoom level. Defaults to 18.
    pub max_zoom: Option<f64>,
}

/// Whether [`OrbitCam::update`] moved the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The pose changed and the camera was re-placed.
    Moved,
    /// The pose is at rest.
    Settled,
}

/// Tracks all state of a camera's controller: the damped current pose, the target pose input is
/// driving toward, the active drag gesture, and settings.
///
/// # Moving the Camera
///
/// With [`DefaultOrbitCamPlugins`](crate::DefaultOrbitCamPlugins), mouse input is routed to every
/// [`OrbitCam`] automatically and the camera [`Transform`] is written each frame. Left drags
/// rotate the globe, middle drags zoom, right drags change bearing and pitch, and the wheel
/// zooms.
///
/// To drive the controller manually, call [`OrbitCam::pointer_down`],
/// [`OrbitCam::pointer_move`], [`OrbitCam::pointer_up`], [`OrbitCam::wheel`] and
/// [`OrbitCam::jump_to`]. These only ever change the target pose. Then call
/// [`OrbitCam::update`] once per frame and read [`OrbitCam::placement`].
#[derive(Debug, Clone, Reflect, Component)]
pub struct OrbitCam {
    /// When false, every input handler is a no-op.
    pub enabled: bool,
    /// What input motions are currently allowed?
    pub enabled_motion: EnabledMotion,
    /// Input sensitivity of the camera.
    pub sensitivity: Sensitivity,
    /// Zoom range reachable through input and jumps.
    pub zoom_limits: ZoomLimits,
    /// Largest pitch reachable through input and jumps, in degrees.
    pub max_pitch: f64,
    /// Fraction of the remaining distance the current pose covers on each update.
    pub damping_factor: f64,
    /// Globe or map navigation.
    pub style: NavigationStyle,
    /// Radius of the sphere being orbited.
    pub radius: f64,
    current: Pose,
    target: Pose,
    session: Option<DragSession>,
    screen: ScreenRect,
    notifier: Notifier,
    needs_update: bool,
    placement: Option<Placement>,
    #[reflect(ignore)]
    listeners: Listeners,
}

impl Default for OrbitCam {
    fn default() -> Self {
        Self::new(NavigationStyle::default(), OrbitCamOptions::default())
    }
}

impl OrbitCam {
    /// Create a controller. Missing options fall back to their defaults, and the initial pose is
    /// clamped into the zoom and pitch limits.
    pub fn new(style: NavigationStyle, options: OrbitCamOptions) -> Self {
        let defaults = Pose::default();
        let zoom_limits = ZoomLimits {
            min_zoom: options.min_zoom.unwrap_or(ZoomLimits::default().min_zoom),
            max_zoom: options.max_zoom.unwrap_or(ZoomLimits::default().max_zoom),
        };
        let max_pitch = 80.0;

        let mut current = Pose {
            coord: options.coord.unwrap_or(defaults.coord),
            zoom: options.zoom.unwrap_or(defaults.zoom),
            bearing: options.bearing.unwrap_or(defaults.bearing),
            pitch: options.pitch.unwrap_or(defaults.pitch),
        };
        current.clamp(zoom_limits.min_zoom, zoom_limits.max_zoom, max_pitch);

        Self {
            enabled: true,
            enabled_motion: Default::default(),
            sensitivity: Default::default(),
            zoom_limits,
            max_pitch,
            damping_factor: 0.2,
            style,
            radius: options.radius.unwrap_or(EARTH_RADIUS),
            current,
            target: current,
            session: None,
            screen: ScreenRect::default(),
            notifier: Notifier::default(),
            // Place the camera on the first update even though nothing is easing.
            needs_update: true,
            placement: None,
            listeners: Listeners::default(),
        }
    }

    /// A globe controller.
    pub fn globe(options: OrbitCamOptions) -> Self {
        Self::new(NavigationStyle::default(), options)
    }

    /// A map controller.
    pub fn map(options: OrbitCamOptions) -> Self {
        Self::new(NavigationStyle::Map(Default::default()), options)
    }

    /// The damped pose the camera is currently placed at.
    pub fn current(&self) -> &Pose {
        &self.current
    }

    /// The pose input is driving toward.
    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// Current angular position.
    pub fn coord(&self) -> DVec2 {
        self.current.coord
    }

    /// Current zoom level.
    pub fn zoom(&self) -> f64 {
        self.current.zoom
    }

    /// Current pitch in degrees.
    pub fn pitch(&self) -> f64 {
        self.current.pitch
    }

    /// Current bearing in radians.
    pub fn bearing(&self) -> f64 {
        self.current.bearing
    }

    /// The camera placement computed by the last update that moved the camera.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// The mode of the active drag gesture, or [`InteractionMode::None`].
    pub fn interaction_mode(&self) -> InteractionMode {
        self.session
            .map(|session| session.mode)
            .unwrap_or(InteractionMode::None)
    }

    /// The active drag gesture, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Is the pose between a start and an end notification?
    pub fn is_moving(&self) -> bool {
        self.notifier.is_moving()
    }

    /// The cached bounds of the input surface.
    pub fn screen_rect(&self) -> ScreenRect {
        self.screen
    }

    /// Replace the cached bounds of the input surface, e.g. after the window was resized.
    pub fn handle_resize(&mut self, rect: impl Into<ScreenRect>) {
        let rect = rect.into();
        if !rect.is_valid() {
            warn_once!("Ignoring pointer input until the screen rect has a size: {rect:?}");
        }
        debug!("Screen rect changed to {rect:?}");
        self.screen = rect;
    }

    /// Move the target pose. Present fields are clamped into the same ranges as input; the
    /// current pose still eases toward them.
    pub fn jump_to(&mut self, pose: PartialPose) {
        debug!("Jumping to {pose:?}");
        self.target.apply(&pose);
        self.target.clamp(
            self.zoom_limits.min_zoom,
            self.zoom_limits.max_zoom,
            self.max_pitch,
        );
    }

    /// Start a drag gesture at `position`, in the same units as the screen rect.
    ///
    /// Ignored while disabled, for [`InteractionMode::None`], for disabled motions, and while a
    /// gesture with another mode is active. Pressing the same button again re-anchors the drag.
    pub fn pointer_down(&mut self, mode: InteractionMode, position: DVec2) {
        if !self.enabled || mode == InteractionMode::None {
            return;
        }
        if self.session.is_some_and(|session| session.mode != mode) {
            return;
        }
        if !self.enabled_motion.allows(mode) {
            return;
        }
        let Some(at) = self.screen.normalize(position) else {
            warn_once!("Pointer input ignored, the screen rect has no size");
            return;
        };
        debug!("Starting {mode:?} drag");
        self.session = Some(DragSession::start(mode, at));
    }

    /// Feed a pointer movement to the active drag gesture.
    pub fn pointer_move(&mut self, position: DVec2) {
        if !self.enabled {
            return;
        }
        let Some(at) = self.screen.normalize(position) else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let delta = session.advance(at);
        let mode = session.mode;
        if !self.enabled_motion.allows(mode) {
            return;
        }
        let tuning = self.drag_tuning();
        apply_drag(mode, delta, at, &self.current, &mut self.target, &tuning);
    }

    /// End the active drag gesture.
    pub fn pointer_up(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(session) = self.session.take() {
            debug!("Ending {:?} drag", session.mode);
        }
    }

    /// Zoom by a wheel delta. Positive values zoom out, like a DOM `deltaY`.
    pub fn wheel(&mut self, delta: f64, mode: WheelDeltaMode) {
        if !self.enabled || !self.enabled_motion.zoom {
            return;
        }
        let change = wheel_zoom_delta(delta, mode, self.sensitivity.zoom);
        self.target.zoom = self.zoom_limits.clamp(self.current.zoom + change);
        north_up_above_globe_zoom(&self.style.input_rules(), &mut self.target);
    }

    /// Register a callback for start/change/end signals.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(OrbitCamSignal, &Pose) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a callback registered with [`OrbitCam::subscribe`].
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Detach the controller: end any gesture, drop every listener, and stop accepting input.
    pub fn dispose(&mut self) {
        debug!("Disposing orbit camera");
        self.session = None;
        self.listeners.clear();
        self.enabled = false;
    }

    /// Advance the current pose toward the target and re-place the camera if it moved. Call once
    /// per frame.
    pub fn update(&mut self) -> UpdateStatus {
        self.update_with(|_| {})
    }

    /// Like [`OrbitCam::update`], also handing every emitted signal to `on_signal` after the
    /// registered listeners saw it.
    pub fn update_with(&mut self, mut on_signal: impl FnMut(OrbitCamSignal)) -> UpdateStatus {
        let factor = self.damping_factor.clamp(0.0, 1.0);
        let step = damping::step(&mut self.current, &mut self.target, factor);
        let moved = step.moved() || std::mem::take(&mut self.needs_update);

        if moved {
            self.placement = Some(self.style.place(self.radius, &self.current));
            trace!("Orbit camera {step:?} to {:?}", self.current);
        }

        for signal in self.notifier.transition(moved) {
            self.listeners.emit(signal, &self.current);
            on_signal(signal);
        }

        if moved {
            UpdateStatus::Moved
        } else {
            UpdateStatus::Settled
        }
    }

    /// Write the last placement into `transform`, looking at the focus point.
    pub fn apply_to_transform(&self, transform: &mut Transform) {
        let Some(placement) = self.placement else {
            return;
        };
        transform.translation = placement.position.as_vec3();
        let up = placement.up.as_vec3();
        transform.look_at(
            placement.focus.as_vec3(),
            if up.is_normalized() { up } else { Vec3::Y },
        );
    }

    /// Update and place all cameras. Called once per frame.
    pub fn update_cameras(
        mut cameras: Query<(Entity, &mut OrbitCam, &mut Transform)>,
        mut events: EventWriter<OrbitCamEvent>,
        mut redraw: EventWriter<RequestRedraw>,
    ) {
        for (camera, mut controller, mut transform) in &mut cameras {
            // Only a moving camera counts as changed.
            let status = controller.bypass_change_detection().update_with(|signal| {
                events.write(OrbitCamEvent { camera, signal });
            });
            if status == UpdateStatus::Moved {
                controller.set_changed();
                controller.apply_to_transform(&mut transform);
                redraw.write(RequestRedraw);
            }
        }
    }

    fn drag_tuning(&self) -> DragTuning {
        DragTuning {
            rotate_speed: self.sensitivity.rotate,
            zoom_speed: self.sensitivity.zoom,
            pan_speed: self.sensitivity.pan,
            zoom_limits: self.zoom_limits,
            max_pitch: self.max_pitch,
            rules: self.style.input_rules(),
        }
    }
}

/// The sensitivity of the camera controller to inputs.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Sensitivity {
    /// Multiplier of rotate drags.
    pub rotate: f64,
    /// Multiplier of zoom drags and the wheel.
    pub zoom: f64,
    /// Multiplier of pan drags.
    pub pan: f64,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            rotate: 1.0,
            zoom: 1.0,
            pan: 1.0,
        }
    }
}

/// Controls what kinds of motions are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct EnabledMotion {
    /// Should rotate drags be enabled?
    pub rotate: bool,
    /// Should zoom drags and the wheel be enabled?
    pub zoom: bool,
    /// Should pan drags be enabled?
    pub pan: bool,
}

impl Default for EnabledMotion {
    fn default() -> Self {
        Self {
            rotate: true,
            zoom: true,
            pan: true,
        }
    }
}

impl EnabledMotion {
    /// Is a drag in `mode` allowed?
    pub fn allows(&self, mode: InteractionMode) -> bool {
        match mode {
            InteractionMode::None => false,
            InteractionMode::Rotate => self.rotate,
            InteractionMode::Zoom => self.zoom,
            InteractionMode::Pan => self.pan,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        f64::consts::{PI, TAU},
        sync::{Arc, Mutex},
    };

    use bevy_math::DVec3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::controller::projections::MAP_FLAT_PITCH;

    fn screen() -> ScreenRect {
        ScreenRect::new(0.0, 0.0, 1000.0, 1000.0)
    }

    fn globe_at(coord: [f64; 2]) -> OrbitCam {
        let mut cam = OrbitCam::globe(OrbitCamOptions {
            radius: Some(EARTH_RADIUS),
            coord: Some(DVec2::from_array(coord)),
            ..Default::default()
        });
        cam.handle_resize(screen());
        cam
    }

    fn record(cam: &mut OrbitCam) -> Arc<Mutex<Vec<OrbitCamSignal>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        cam.subscribe(move |signal, _| sink.lock().unwrap().push(signal));
        log
    }

    fn settle(cam: &mut OrbitCam) {
        for _ in 0..1_000 {
            if cam.update() == UpdateStatus::Settled {
                return;
            }
        }
        panic!("camera never settled");
    }

    #[test]
    fn options_fall_back_to_defaults() {
        let cam = OrbitCam::default();
        assert_eq!(cam.radius, EARTH_RADIUS);
        assert_eq!(*cam.current(), Pose::default());
        assert_eq!(cam.target(), cam.current());
        assert_eq!(cam.zoom_limits, ZoomLimits::default());
        assert_eq!(cam.max_pitch, 80.0);
        assert_eq!(cam.damping_factor, 0.2);
    }

    #[test]
    fn first_update_places_camera_outside_sphere() {
        let mut cam = globe_at([0.5, 0.8]);
        let log = record(&mut cam);

        assert_eq!(cam.update(), UpdateStatus::Moved);
        let changes = log
            .lock()
            .unwrap()
            .iter()
            .filter(|s| **s == OrbitCamSignal::Change)
            .count();
        assert_eq!(changes, 1);

        let placement = cam.placement().unwrap();
        assert!(placement.position.length() > EARTH_RADIUS);
    }

    #[test]
    fn jump_eases_to_target() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.update();
        cam.jump_to(PartialPose::default().with_coord(0.0, 0.0).with_bearing(0.5));
        // jumping never touches the current pose directly
        assert_eq!(cam.coord(), DVec2::new(0.5, 0.8));

        for _ in 0..100 {
            cam.update();
        }
        assert!(cam.coord().length() < 1e-6);
        assert!((cam.bearing() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn jump_is_clamped() {
        let mut cam = OrbitCam::default();
        cam.jump_to(PartialPose {
            coord: Some(DVec2::new(1.0, 7.0)),
            zoom: Some(99.0),
            pitch: Some(-5.0),
            bearing: None,
        });
        assert_eq!(cam.target().coord.y, PI);
        assert_eq!(cam.target().zoom, 18.0);
        assert_eq!(cam.target().pitch, 0.0);
    }

    #[test]
    fn wheel_pixels_zoom_out() {
        let mut cam = OrbitCam::map(Default::default());
        cam.wheel(100.0, WheelDeltaMode::Pixel);
        assert!((cam.target().zoom - 10.8).abs() < 1e-12);

        cam.wheel(1e6, WheelDeltaMode::Page);
        assert_eq!(cam.target().zoom, 18.0);
    }

    #[test]
    fn globe_wheel_past_globe_zoom_is_north_up() {
        let mut cam = OrbitCam::globe(OrbitCamOptions {
            bearing: Some(1.0),
            ..Default::default()
        });
        cam.wheel(100.0, WheelDeltaMode::Pixel);
        assert_eq!(cam.target().bearing, 0.0);

        let mut map = OrbitCam::map(OrbitCamOptions {
            bearing: Some(1.0),
            ..Default::default()
        });
        map.wheel(100.0, WheelDeltaMode::Pixel);
        assert_eq!(map.target().bearing, 1.0);
    }

    #[test]
    fn signals_follow_motion() {
        use OrbitCamSignal::*;
        let mut cam = globe_at([0.5, 0.8]);
        let log = record(&mut cam);

        cam.update();
        cam.update();
        assert_eq!(*log.lock().unwrap(), [Start, Change, End]);

        cam.jump_to(PartialPose::default().with_zoom(9.0));
        settle(&mut cam);
        let log = log.lock().unwrap();
        assert_eq!(log[3..5], [Start, Change]);
        assert_eq!(log.last(), Some(&End));
        assert_eq!(log.iter().filter(|s| **s == End).count(), 2);
        assert_eq!(log.iter().filter(|s| **s == Start).count(), 2);
    }

    #[test]
    fn converged_camera_ends_then_stays_quiet() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.jump_to(PartialPose::default().with_coord(10.0 * PI, 0.8));
        settle(&mut cam);
        let log = record(&mut cam);

        let before = *cam.current();
        for _ in 0..10 {
            assert_eq!(cam.update(), UpdateStatus::Settled);
        }
        assert_eq!(*cam.current(), before);
        assert!(log.lock().unwrap().is_empty());
        let x = cam.coord().x;
        assert!(x.min(TAU - x) < 1e-6);
    }

    #[test]
    fn rotate_drag_moves_target_only() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.update();
        cam.pointer_down(InteractionMode::Rotate, DVec2::new(500.0, 500.0));
        cam.pointer_move(DVec2::new(600.0, 500.0));

        assert_eq!(cam.coord(), DVec2::new(0.5, 0.8));
        let expected = 0.5 - 0.1 * 2f64.powf(9.0) * 1e-4;
        assert!((cam.target().coord.x - expected).abs() < 1e-12);
        assert_eq!(cam.target().coord.y, 0.8);
    }

    #[test]
    fn drag_mode_is_exclusive_until_release() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.pointer_down(InteractionMode::Rotate, DVec2::new(500.0, 500.0));
        cam.pointer_down(InteractionMode::Zoom, DVec2::new(500.0, 500.0));
        assert_eq!(cam.interaction_mode(), InteractionMode::Rotate);

        cam.pointer_move(DVec2::new(500.0, 700.0));
        assert_eq!(cam.target().zoom, 10.0);

        cam.pointer_up();
        assert_eq!(cam.interaction_mode(), InteractionMode::None);
        cam.pointer_down(InteractionMode::Zoom, DVec2::new(500.0, 500.0));
        cam.pointer_move(DVec2::new(500.0, 510.0));
        assert!((cam.target().zoom - 10.32).abs() < 1e-9);
    }

    #[test]
    fn moves_without_gesture_are_ignored() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.pointer_move(DVec2::new(900.0, 900.0));
        assert_eq!(cam.target(), cam.current());
    }

    #[test]
    fn disabled_controller_ignores_input() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.enabled = false;
        cam.pointer_down(InteractionMode::Pan, DVec2::new(500.0, 500.0));
        cam.wheel(100.0, WheelDeltaMode::Line);
        assert_eq!(cam.interaction_mode(), InteractionMode::None);
        assert_eq!(cam.target(), cam.current());
    }

    #[test]
    fn disabled_motion_cannot_start() {
        let mut cam = globe_at([0.5, 0.8]);
        cam.enabled_motion.rotate = false;
        cam.pointer_down(InteractionMode::Rotate, DVec2::new(500.0, 500.0));
        assert_eq!(cam.interaction_mode(), InteractionMode::None);

        cam.enabled_motion.zoom = false;
        cam.wheel(100.0, WheelDeltaMode::Pixel);
        assert_eq!(cam.target().zoom, 10.0);
    }

    #[test]
    fn degenerate_screen_rejects_pointer() {
        let mut cam = OrbitCam::default();
        cam.pointer_down(InteractionMode::Rotate, DVec2::new(10.0, 10.0));
        assert_eq!(cam.interaction_mode(), InteractionMode::None);
    }

    #[test]
    fn dispose_detaches_everything() {
        let mut cam = globe_at([0.5, 0.8]);
        let log = record(&mut cam);
        cam.pointer_down(InteractionMode::Rotate, DVec2::new(500.0, 500.0));
        cam.dispose();

        assert_eq!(cam.interaction_mode(), InteractionMode::None);
        cam.pointer_down(InteractionMode::Rotate, DVec2::new(500.0, 500.0));
        assert_eq!(cam.interaction_mode(), InteractionMode::None);
        cam.update();
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn map_flat_up_vector() {
        let mut cam = OrbitCam::map(OrbitCamOptions {
            pitch: Some(0.0),
            bearing: Some(0.3),
            ..Default::default()
        });
        cam.update();
        let up = cam.placement().unwrap().up;
        let angle = std::f64::consts::FRAC_PI_2 + 0.3;
        assert!((up - DVec3::new(angle.cos(), angle.sin(), 0.0)).length() < 1e-12);
        assert!(cam.pitch() <= MAP_FLAT_PITCH);
    }

    #[test]
    fn random_gestures_respect_limits() {
        let mut rng = StdRng::seed_from_u64(42);
        for style in [NavigationStyle::default(), NavigationStyle::Map(Default::default())] {
            let mut cam = OrbitCam::new(style, Default::default());
            cam.handle_resize(screen());
            for _ in 0..200 {
                let mode = match rng.gen_range(0..4) {
                    0 => InteractionMode::Rotate,
                    1 => InteractionMode::Zoom,
                    2 => InteractionMode::Pan,
                    _ => InteractionMode::None,
                };
                let press = DVec2::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0));
                cam.pointer_down(mode, press);
                for _ in 0..rng.gen_range(1..6) {
                    cam.pointer_move(DVec2::new(
                        rng.gen_range(-500.0..1500.0),
                        rng.gen_range(-500.0..1500.0),
                    ));
                    if rng.gen_bool(0.3) {
                        cam.wheel(rng.gen_range(-2000.0..2000.0), WheelDeltaMode::Pixel);
                    }
                    cam.update();

                    for pose in [*cam.current(), *cam.target()] {
                        assert!((1.0..=18.0).contains(&pose.zoom), "{pose:?}");
                        assert!((0.0..=PI).contains(&pose.coord.y), "{pose:?}");
                        assert!((0.0..=80.0).contains(&pose.pitch), "{pose:?}");
                    }
                    let placement = cam.placement().unwrap();
                    assert!(placement.position.is_finite());
                    assert!(placement.up.is_finite());
                }
                cam.pointer_up();
            }
        }
    }
}
